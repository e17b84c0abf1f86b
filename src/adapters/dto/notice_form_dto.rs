use axum::{
    extract::{
        multipart::{Field, Multipart},
        FromRequest, Request,
    },
    http::header,
    Form,
};
use tracing::warn;

use crate::domain::models::file::FileData;

/// Fields of a `POST /notices` form submission. Anything missing or
/// unreadable is left as `None`; validation happens in the controller.
#[derive(Debug, Default)]
pub struct CreateNoticeForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub media: Option<FileData>,
}

impl CreateNoticeForm {
    /// Multipart bodies may carry a media file; url-encoded bodies only carry
    /// text fields. Any other body yields an empty form.
    pub async fn from_request(request: Request) -> Self {
        let is_multipart = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.to_ascii_lowercase().starts_with("multipart/"));

        if is_multipart {
            return match Multipart::from_request(request, &()).await {
                Ok(multipart) => Self::from_multipart(multipart).await,
                Err(rejection) => {
                    warn!("Invalid multipart request: {}", rejection);
                    Self::default()
                }
            };
        }

        match Form::<Vec<(String, String)>>::from_request(request, &()).await {
            Ok(Form(pairs)) => Self::from_pairs(pairs),
            Err(rejection) => {
                warn!("Request is not a form submission: {}", rejection);
                Self::default()
            }
        }
    }

    /// Url-encoded fields. The first occurrence of a field wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();

        for (name, value) in pairs {
            match name.as_str() {
                "title" if form.title.is_none() => form.title = Some(value),
                "content" if form.content.is_none() => form.content = Some(value),
                _ => {}
            }
        }

        form
    }

    /// Reads every part of the body. The first occurrence of a field wins.
    /// A broken stream stops parsing but keeps what was already read.
    pub async fn from_multipart(mut multipart: Multipart) -> Self {
        let mut form = Self::default();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    warn!("Invalid multipart data: {}", e);
                    break;
                }
            };

            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "title" if form.title.is_none() => form.title = read_text(field).await,
                "content" if form.content.is_none() => form.content = read_text(field).await,
                "media" if form.media.is_none() => form.media = read_file(field).await,
                _ => {}
            }
        }

        form
    }

    /// Title and content, if both are present and non-empty. No trimming.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        match (self.title.as_deref(), self.content.as_deref()) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Some((title, content))
            }
            _ => None,
        }
    }
}

async fn read_text(field: Field<'_>) -> Option<String> {
    // File parts are not form values.
    if field.file_name().is_some() {
        return None;
    }

    let name = field.name().unwrap_or("").to_string();
    field
        .text()
        .await
        .map_err(|e| warn!("Cannot read {} field: {}", name, e))
        .ok()
}

/// Only parts with a filename count as uploads. A media part that cannot be
/// read is treated as no file at all.
async fn read_file(field: Field<'_>) -> Option<FileData> {
    let filename = match field.file_name() {
        Some(filename) if !filename.is_empty() => filename.to_string(),
        _ => return None,
    };

    match field.bytes().await {
        Ok(bytes) => Some(FileData::new(bytes.to_vec(), filename)),
        Err(e) => {
            warn!("Cannot read media file {}: {}", filename, e);
            None
        }
    }
}
