use async_trait::async_trait;

use crate::{
    application::{dto::notice_dto::NoticeDTO, error::ApplicationError},
    domain::models::notice::Notice,
};

#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Stores a new notice and returns it with its assigned id.
    async fn create_notice(&self, notice: NoticeDTO) -> Result<Notice, ApplicationError>;
    async fn get_all_notices(&self) -> Result<Vec<Notice>, ApplicationError>;
}
