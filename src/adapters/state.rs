use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::{repositories::notice_repository::NoticeRepository, services::MediaStorage};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub notice_repository: Arc<dyn NoticeRepository>,
    pub media_storage: Arc<dyn MediaStorage>,
}
