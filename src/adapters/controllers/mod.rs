pub mod notice_controller;
