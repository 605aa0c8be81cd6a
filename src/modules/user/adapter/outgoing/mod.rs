pub mod user_console_query_postgres;

pub use user_console_query_postgres::UserConsoleQueryPostgres;
