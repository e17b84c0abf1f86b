use serde::{Deserialize, Serialize};

use crate::domain::models::notice::Notice;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NoticeDTO {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub media: Option<String>,
    pub likes: Option<i64>,
}

impl NoticeDTO {
    /// A notice that has not been stored yet: no id, zero likes.
    pub fn for_create(title: String, content: String, media: Option<String>) -> Self {
        Self {
            id: None,
            title,
            content,
            media,
            likes: Some(0),
        }
    }
}

impl From<Notice> for NoticeDTO {
    fn from(value: Notice) -> Self {
        NoticeDTO {
            id: Some(value.id),
            title: value.title,
            content: value.content,
            media: value.media,
            likes: Some(value.likes),
        }
    }
}

impl From<NoticeDTO> for Notice {
    fn from(value: NoticeDTO) -> Self {
        Notice {
            id: value.id.unwrap_or(0),
            title: value.title,
            content: value.content,
            media: value.media,
            likes: value.likes.unwrap_or(0),
        }
    }
}
