pub mod notice_repository;
