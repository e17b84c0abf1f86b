use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::file::{FileData, StoredMedia},
};

#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn save(&self, file_data: FileData) -> Result<StoredMedia, ApplicationError>;
}
