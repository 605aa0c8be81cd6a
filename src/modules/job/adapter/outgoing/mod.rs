pub mod application_repository_postgres;
pub mod favorite_repository_postgres;
pub mod job_query_postgres;
pub mod job_repository_postgres;
pub mod jobicy_gateway;
pub mod sea_orm_entity;

pub use application_repository_postgres::ApplicationRepositoryPostgres;
pub use favorite_repository_postgres::FavoriteRepositoryPostgres;
pub use job_query_postgres::JobQueryPostgres;
pub use job_repository_postgres::JobRepositoryPostgres;
pub use jobicy_gateway::{JobicyGateway, DEFAULT_JOBICY_URL};
