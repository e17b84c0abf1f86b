use sqlx::{postgres::PgRow, FromRow, Row};

use crate::application::dto::notice_dto::NoticeDTO;

impl FromRow<'_, PgRow> for NoticeDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(NoticeDTO {
            id: Some(row.try_get("id")?),
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            media: row.try_get("media")?,
            likes: Some(row.try_get("likes")?),
        })
    }
}
