pub mod notice_dto;
