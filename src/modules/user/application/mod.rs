pub mod domain;
pub mod ports;
pub mod service;
pub mod user_console_use_cases;
