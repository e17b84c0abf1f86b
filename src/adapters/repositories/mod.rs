#[cfg(test)]
mod memory_notice_repository;
mod pg_notice_repository;

#[cfg(test)]
pub use memory_notice_repository::InMemoryNoticeRepository;
pub use pg_notice_repository::PgNoticeRepository;
