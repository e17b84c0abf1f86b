pub mod file;
pub mod notice;
