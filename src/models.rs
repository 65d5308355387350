use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 1;

/// Parameters for a single search call.
///
/// `page` and `per_page` both default to 1. Values are sent as-is; the
/// upstream decides what to do with out-of-range numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoQuality {
    Sd,
    Hd,
    Hls,
}

/// One encoded rendition of a video.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoFile {
    pub id: u64,
    pub quality: VideoQuality,
    /// MIME type, e.g. "video/mp4".
    pub file_type: String,
    /// `None` for adaptive streams (hls).
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    /// Position of the frame in the preview strip.
    #[serde(rename = "nr")]
    pub sequence_number: u32,
}

/// The contributor who uploaded a video.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoOwner {
    pub id: u64,
    pub name: String,
    #[serde(rename = "url")]
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoAsset {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    /// Page on pexels.com.
    pub url: String,
    #[serde(rename = "image")]
    pub preview_image: String,
    #[serde(rename = "duration")]
    pub duration_seconds: u32,
    #[serde(rename = "user")]
    pub owner: VideoOwner,
    #[serde(rename = "video_files")]
    pub files: Vec<VideoFile>,
    #[serde(rename = "video_pictures")]
    pub preview_pictures: Vec<VideoPicture>,
}

impl VideoAsset {
    /// First file with the given quality, in upstream order.
    pub fn file_with_quality(&self, quality: VideoQuality) -> Option<&VideoFile> {
        self.files.iter().find(|f| f.quality == quality)
    }
}

/// One page of search results, in the order the upstream returned them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResult {
    pub videos: Vec<VideoAsset>,
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    /// Absolute URL of the following page. `None` on the last page.
    #[serde(rename = "next_page", default)]
    pub next_page_url: Option<String>,
}

impl SearchResult {
    /// `true` if `next_page_url` is `Some`.
    pub fn has_more(&self) -> bool {
        self.next_page_url.is_some()
    }
}
