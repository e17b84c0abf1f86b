use async_trait::async_trait;
use sqlx::query_as;
use tracing::info;

use crate::{
    application::{
        dto::notice_dto::NoticeDTO, error::ApplicationError,
        repositories::notice_repository::NoticeRepository,
    },
    domain::models::notice::Notice,
};

const CREATE_NOTICES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS notices (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        media TEXT,
        likes BIGINT NOT NULL DEFAULT 0
    )
"#;

pub struct PgNoticeRepository {
    pool: sqlx::PgPool,
}

impl PgNoticeRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `notices` table if it is missing. Safe to run on every startup.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_NOTICES_TABLE)
            .execute(&self.pool)
            .await?;
        info!("Notices schema ready");
        Ok(())
    }
}

#[async_trait]
impl NoticeRepository for PgNoticeRepository {
    async fn create_notice(&self, notice: NoticeDTO) -> Result<Notice, ApplicationError> {
        let query = r#"
            INSERT INTO notices (title, content, media, likes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, media, likes
        "#;

        let created: NoticeDTO = query_as::<_, NoticeDTO>(query)
            .bind(&notice.title)
            .bind(&notice.content)
            .bind(&notice.media)
            .bind(notice.likes.unwrap_or(0))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::database("Failed to create notice", e))?;

        Ok(created.into())
    }

    async fn get_all_notices(&self) -> Result<Vec<Notice>, ApplicationError> {
        let query = "SELECT id, title, content, media, likes FROM notices ORDER BY id";

        let rows: Vec<NoticeDTO> = query_as::<_, NoticeDTO>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::database("Failed to retrieve notices", e))?;

        Ok(rows.into_iter().map(|dto| dto.into()).collect())
    }
}
