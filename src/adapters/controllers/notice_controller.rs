use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    adapters::dto::notice_form_dto::CreateNoticeForm,
    application::{
        dto::notice_dto::NoticeDTO, error::ApplicationError,
        repositories::notice_repository::NoticeRepository, services::MediaStorage,
    },
    domain::models::notice::Notice,
};

pub struct NoticeController;

impl NoticeController {
    /// POST /notices
    /// Multipart (title, content, optional media file) or url-encoded (title, content)
    pub async fn create_notice(
        State(notice_repo): State<Arc<dyn NoticeRepository>>,
        State(media_storage): State<Arc<dyn MediaStorage>>,
        request: Request,
    ) -> Result<(StatusCode, Json<Notice>), ApplicationError> {
        let form = CreateNoticeForm::from_request(request).await;

        let (title, content) = form.required_fields().ok_or_else(|| {
            ApplicationError::BadRequest("Title and Content are required".to_string())
        })?;
        let (title, content) = (title.to_string(), content.to_string());

        let media = match form.media {
            Some(file_data) => {
                let stored = media_storage.save(file_data).await?;
                info!("Attached media {} ({} bytes)", stored.filename, stored.size);
                Some(stored.url)
            }
            None => None,
        };

        let notice = notice_repo
            .create_notice(NoticeDTO::for_create(title, content, media))
            .await?;

        info!("Created notice {}", notice.id);

        Ok((StatusCode::CREATED, Json(notice)))
    }

    /// GET /notices
    pub async fn list_notices(
        State(notice_repo): State<Arc<dyn NoticeRepository>>,
    ) -> Result<Json<Vec<Notice>>, ApplicationError> {
        let notices = notice_repo.get_all_notices().await?;
        Ok(Json(notices))
    }
}
