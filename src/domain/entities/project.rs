use serde::Serialize;

/// One portfolio gallery entry. Image pieces carry an `image` path; video
/// pieces carry a YouTube `videoId` instead.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub featured: bool,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<&'static str>,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Youtube,
}
