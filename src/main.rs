pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::{auth, company, job, user};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    UserActivityPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    authenticate_user::AuthenticateUserUseCase, change_password::ChangePasswordUseCase,
    fetch_profile::FetchProfileUseCase, login_user::LoginUserUseCase,
    register_user::RegisterUserUseCase, update_profile::UpdateProfileUseCase,
};
use crate::company::adapter::outgoing::{CompanyJobQueryPostgres, CompanyJobRepositoryPostgres};
use crate::company::application::company_use_cases::CompanyUseCases;
use crate::company::application::service::{
    CompanyDashboardService, DeactivateCompanyJobService, ListApplicantsService,
    ListCompanyJobsService, UpdateApplicationStatusService, UpdateCompanyJobService,
};
use crate::config::AppConfig;
use crate::job::adapter::outgoing::{
    ApplicationRepositoryPostgres, FavoriteRepositoryPostgres, JobQueryPostgres,
    JobRepositoryPostgres, JobicyGateway,
};
use crate::job::application::job_use_cases::JobUseCases;
use crate::job::application::ports::outgoing::ExternalJobsGateway;
use crate::job::application::service::{
    ApplyToJobService, CreateJobService, GetJobService, ListJobsService, ListRandomJobsService,
    RandomJobsSettings, ToggleFavoriteService,
};
use crate::shared::api::{
    custom_json_config, custom_path_config, custom_query_config, ApiResponse,
};
use crate::user::adapter::outgoing::UserConsoleQueryPostgres;
use crate::user::application::service::{
    DeactivateAccountService, ListApplicationsService, ListFavoritesService,
    UpdatePreferencesService, UserDashboardService,
};
use crate::user::application::user_console_use_cases::UserConsoleUseCases;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub jobs: JobUseCases,
    pub company: CompanyUseCases,
    pub users: UserConsoleUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    config: &AppConfig,
    jwt_service: JwtTokenService,
    hasher: Argon2Hasher,
    gateway: JobicyGateway,
) -> AppState {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(hasher);
    let tokens: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let gateway: Arc<dyn ExternalJobsGateway> = Arc::new(gateway);

    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_activity = UserActivityPostgres::new(Arc::clone(db));
    let job_query = JobQueryPostgres::new(Arc::clone(db));
    let job_repo = JobRepositoryPostgres::new(Arc::clone(db));
    let application_repo = ApplicationRepositoryPostgres::new(Arc::clone(db));
    let favorite_repo = FavoriteRepositoryPostgres::new(Arc::clone(db));
    let company_query = CompanyJobQueryPostgres::new(Arc::clone(db));
    let company_repo = CompanyJobRepositoryPostgres::new(Arc::clone(db));
    let console_query = UserConsoleQueryPostgres::new(Arc::clone(db));

    let random_settings = RandomJobsSettings {
        techs_per_request: config.random_jobs_tech_count,
        per_call_timeout: config.external_api_timeout,
        ..RandomJobsSettings::default()
    };

    AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserUseCase::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&hasher),
                Arc::clone(&tokens),
            )),
            login: Arc::new(LoginUserUseCase::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&hasher),
                Arc::clone(&tokens),
            )),
            authenticate: Arc::new(AuthenticateUserUseCase::new(
                user_query.clone(),
                Arc::clone(&tokens),
            )),
            fetch_profile: Arc::new(FetchProfileUseCase::new(user_query.clone(), user_activity)),
            update_profile: Arc::new(UpdateProfileUseCase::new(
                user_query.clone(),
                user_repo.clone(),
            )),
            change_password: Arc::new(ChangePasswordUseCase::new(
                user_query,
                user_repo.clone(),
                hasher,
            )),
        },
        jobs: JobUseCases {
            list: Arc::new(ListJobsService::new(job_query.clone())),
            get: Arc::new(GetJobService::new(job_query.clone(), job_repo.clone())),
            random: Arc::new(ListRandomJobsService::new(
                gateway,
                job_query.clone(),
                random_settings,
            )),
            create: Arc::new(CreateJobService::new(job_repo)),
            apply: Arc::new(ApplyToJobService::new(job_query, application_repo)),
            toggle_favorite: Arc::new(ToggleFavoriteService::new(favorite_repo)),
        },
        company: CompanyUseCases {
            list_jobs: Arc::new(ListCompanyJobsService::new(company_query.clone())),
            list_applicants: Arc::new(ListApplicantsService::new(company_query.clone())),
            update_job: Arc::new(UpdateCompanyJobService::new(company_repo.clone())),
            deactivate_job: Arc::new(DeactivateCompanyJobService::new(company_repo.clone())),
            update_application_status: Arc::new(UpdateApplicationStatusService::new(
                company_repo,
            )),
            dashboard: Arc::new(CompanyDashboardService::new(company_query)),
        },
        users: UserConsoleUseCases {
            applications: Arc::new(ListApplicationsService::new(console_query.clone())),
            favorites: Arc::new(ListFavoritesService::new(console_query.clone())),
            update_preferences: Arc::new(UpdatePreferencesService::new(user_repo.clone())),
            dashboard: Arc::new(UserDashboardService::new(console_query)),
            deactivate_account: Arc::new(DeactivateAccountService::new(user_repo)),
        },
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().expect("Invalid application configuration");
    let jwt_config = JwtConfig::from_env().expect("Invalid JWT configuration");
    let hasher = Argon2Hasher::from_env().expect("Invalid Argon2 parameters");
    let gateway = JobicyGateway::new(config.jobicy_api_url.clone(), config.external_api_timeout)
        .expect("Failed to build Jobicy client");

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .expect("Failed to run database migrations");
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = build_state(
        &db_arc,
        &config,
        JwtTokenService::new(jwt_config),
        hasher,
        gateway,
    );

    let server_url = config.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .default_service(web::to(route_not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

async fn route_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("ROUTE_NOT_FOUND", "Route not found")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health and docs
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Jobs; `random` must be registered before `{id}`
    cfg.service(crate::job::adapter::incoming::web::routes::list_random_jobs_handler);
    cfg.service(crate::job::adapter::incoming::web::routes::list_jobs_handler);
    cfg.service(crate::job::adapter::incoming::web::routes::create_job_handler);
    cfg.service(crate::job::adapter::incoming::web::routes::get_job_handler);
    cfg.service(crate::job::adapter::incoming::web::routes::apply_to_job_handler);
    cfg.service(crate::job::adapter::incoming::web::routes::toggle_favorite_handler);
    // Company console
    cfg.service(crate::company::adapter::incoming::web::routes::list_company_jobs_handler);
    cfg.service(crate::company::adapter::incoming::web::routes::list_applicants_handler);
    cfg.service(crate::company::adapter::incoming::web::routes::update_company_job_handler);
    cfg.service(crate::company::adapter::incoming::web::routes::deactivate_company_job_handler);
    cfg.service(crate::company::adapter::incoming::web::routes::update_application_status_handler);
    cfg.service(crate::company::adapter::incoming::web::routes::company_dashboard_handler);
    // User console
    cfg.service(crate::user::adapter::incoming::web::routes::list_applications_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::list_favorites_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_preferences_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::user_dashboard_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::deactivate_account_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
