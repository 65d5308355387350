//! # pexels-video
//!
//! Async Rust client for the [Pexels](https://www.pexels.com/api/) video
//! search API. One call, one GET: build the search URL, send it with your API
//! key, and get back typed results -- or the error that stopped it.
//!
//! ## Quick start
//!
//! ```no_run
//! use pexels_video::Client;
//!
//! #[tokio::main]
//! async fn main() -> pexels_video::Result<()> {
//!     let client = Client::new("your-pexels-key")?;
//!
//!     let result = client.search("cats", Some(5), Some(2)).await?;
//!
//!     println!("{} matches", result.total_results);
//!     for video in &result.videos {
//!         println!("  [{}s] {}", video.duration_seconds, video.url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use pexels_video::ClientBuilder;
//!
//! # fn example() -> pexels_video::Result<()> {
//! // Reads PEXELS_API_KEY when no key is given.
//! let client = ClientBuilder::new()
//!     .base_url("https://proxy.example.com/videos")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! Failures are reported through [`tracing`] at the point they are detected
//! and then returned unchanged. Nothing is retried or cached.

mod client;
mod errors;
mod models;

pub use client::{Client, ClientBuilder};
pub use errors::{PexelsError, Result};
pub use models::{
    SearchRequest, SearchResult, VideoAsset, VideoFile, VideoOwner, VideoPicture, VideoQuality,
};
