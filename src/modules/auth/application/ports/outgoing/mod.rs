pub mod password_hasher;
pub mod token_provider;
pub mod user_activity_query;
pub mod user_query;
pub mod user_repository;

pub use user_activity_query::UserActivityQuery;
pub use user_query::UserQuery;
pub use user_repository::{UserRepository, UserRepositoryError};
