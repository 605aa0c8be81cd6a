pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_activity_postgres;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use user_activity_postgres::UserActivityPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
