use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    application::{
        dto::notice_dto::NoticeDTO, error::ApplicationError,
        repositories::notice_repository::NoticeRepository,
    },
    domain::models::notice::Notice,
};

/// Process-local store with sequential ids starting at 1.
#[derive(Default)]
pub struct InMemoryNoticeRepository {
    notices: Mutex<Vec<Notice>>,
}

impl InMemoryNoticeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

#[async_trait]
impl NoticeRepository for InMemoryNoticeRepository {
    async fn create_notice(&self, notice: NoticeDTO) -> Result<Notice, ApplicationError> {
        let mut notices = self.notices.lock().unwrap();

        let mut created: Notice = notice.into();
        created.id = notices.last().map_or(1, |last| last.id + 1);
        notices.push(created.clone());

        Ok(created)
    }

    async fn get_all_notices(&self) -> Result<Vec<Notice>, ApplicationError> {
        Ok(self.notices.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_fresh_ids_in_insertion_order() {
        let repo = InMemoryNoticeRepository::new();

        let first = repo
            .create_notice(NoticeDTO::for_create("a".into(), "b".into(), None))
            .await
            .unwrap();
        let second = repo
            .create_notice(NoticeDTO::for_create(
                "c".into(),
                "d".into(),
                Some("http://x/uploads/y.png".into()),
            ))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.likes, 0);
        assert_eq!(repo.get_all_notices().await.unwrap(), vec![first, second]);
    }
}
