use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Public URL of the uploaded media file, if one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    pub likes: i64,
}
