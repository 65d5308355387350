//! Quick-start example for the Pexels video client.
//!
//! Run with:
//!   PEXELS_API_KEY=... cargo run --example quickstart -- "ocean waves"
//!
//! Failures show up as ERROR lines from the fmt subscriber before `main` returns.

use pexels_video::{ClientBuilder, SearchRequest, VideoQuality};

#[tokio::main]
async fn main() -> pexels_video::Result<()> {
    tracing_subscriber::fmt::init();

    // -----------------------------------------------------------------------
    // 1. Create a client (reads PEXELS_API_KEY from environment)
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new().build()?;

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "nature".to_string());

    // -----------------------------------------------------------------------
    // 2. One search with explicit paging
    // -----------------------------------------------------------------------
    let request = SearchRequest::new(query).per_page(5);
    println!("GET {}", client.search_url(&request));

    let mut result = client.search_request(&request).await?;
    println!("{} total results", result.total_results);

    // -----------------------------------------------------------------------
    // 3. Walk a couple of pages through the upstream's next_page links
    // -----------------------------------------------------------------------
    for _ in 0..2 {
        println!("Page {}:", result.page);
        for video in &result.videos {
            let hd = video
                .file_with_quality(VideoQuality::Hd)
                .map(|f| f.link.as_str())
                .unwrap_or("-");
            println!(
                "  {} | {}x{} | {}s | {} | {}",
                video.id, video.width, video.height, video.duration_seconds, video.owner.name, hd
            );
        }

        match client.next_page(&result).await? {
            Some(next) => result = next,
            None => break,
        }
    }

    Ok(())
}
