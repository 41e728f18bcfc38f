use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A carousel as the API serves it, before display transformation.
///
/// Only the fields this crate acts on are typed; everything else the server
/// sends rides along in `extra` and survives the transform untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCarousel {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub items: Vec<RawItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "videoUrl", default)]
    pub video_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A carousel ready for display: stable ids assigned, image URLs repaired,
/// `has_video` derived. Cached as-is and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carousel {
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<CarouselItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselItem {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "hasVideo")]
    pub has_video: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
