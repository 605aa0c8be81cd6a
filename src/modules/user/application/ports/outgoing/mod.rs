pub mod user_console_query;

pub use user_console_query::{UserConsoleQuery, UserConsoleQueryError};
