pub mod notice_dto;
pub mod notice_form_dto;
