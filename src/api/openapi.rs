use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequest, LoginRequestDto, LoginResponse, LoginUserInfo, RegisterRequestDto,
    RegisterResponse, SessionUser, UpdateProfileRequest,
};
use crate::company::adapter::incoming::web::routes::{
    ApplicantListResponse, CompanyJobsResponse, StatusUpdateRequest, UpdateJobRequest,
};
use crate::job::adapter::incoming::web::routes::{
    ApplyRequest, CreateJobRequest, JobListResponse, RandomJobsResponse, SalaryDto,
    ToggleFavoriteResponse,
};
use crate::shared::validation::FieldError;
use crate::user::adapter::incoming::web::routes::UpdatePreferencesRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Board API",
        version = "1.0.0",
        description = "Job postings, applications and the company and user consoles"
    ),
    paths(
        crate::health::health,
        crate::health::readiness,
        // auth
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile::get_current_user_handler,
        crate::auth::adapter::incoming::web::routes::update_profile::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password::change_password_handler,
        // jobs
        crate::job::adapter::incoming::web::routes::list_jobs::list_jobs_handler,
        crate::job::adapter::incoming::web::routes::list_random_jobs::list_random_jobs_handler,
        crate::job::adapter::incoming::web::routes::get_job::get_job_handler,
        crate::job::adapter::incoming::web::routes::create_job::create_job_handler,
        crate::job::adapter::incoming::web::routes::apply_to_job::apply_to_job_handler,
        crate::job::adapter::incoming::web::routes::toggle_favorite::toggle_favorite_handler,
        // company console
        crate::company::adapter::incoming::web::routes::list_company_jobs::list_company_jobs_handler,
        crate::company::adapter::incoming::web::routes::list_applicants::list_applicants_handler,
        crate::company::adapter::incoming::web::routes::update_company_job::update_company_job_handler,
        crate::company::adapter::incoming::web::routes::deactivate_company_job::deactivate_company_job_handler,
        crate::company::adapter::incoming::web::routes::update_application_status::update_application_status_handler,
        crate::company::adapter::incoming::web::routes::company_dashboard::company_dashboard_handler,
        // user console
        crate::user::adapter::incoming::web::routes::list_applications::list_applications_handler,
        crate::user::adapter::incoming::web::routes::list_favorites::list_favorites_handler,
        crate::user::adapter::incoming::web::routes::update_preferences::update_preferences_handler,
        crate::user::adapter::incoming::web::routes::user_dashboard::user_dashboard_handler,
        crate::user::adapter::incoming::web::routes::deactivate_account::deactivate_account_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            FieldError,
            RegisterRequestDto,
            RegisterResponse,
            SessionUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            UpdateProfileRequest,
            ChangePasswordRequest,
            CreateJobRequest,
            SalaryDto,
            ApplyRequest,
            JobListResponse,
            RandomJobsResponse,
            ToggleFavoriteResponse,
            CompanyJobsResponse,
            ApplicantListResponse,
            UpdateJobRequest,
            StatusUpdateRequest,
            UpdatePreferencesRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Registration, login and the caller's account"),
        (name = "jobs", description = "Public listings and job actions"),
        (name = "companies", description = "Company console"),
        (name = "users", description = "User console"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by register or login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/health",
            "/api/auth/register",
            "/api/jobs",
            "/api/jobs/random",
            "/api/jobs/{id}/favorite",
            "/api/companies/dashboard",
            "/api/users/preferences",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[actix_web::test]
    async fn serves_document_as_json() {
        let app = actix_test::init_service(App::new().service(openapi_json)).await;
        let req = actix_test::TestRequest::get().uri("/api/openapi.json").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["info"]["title"], "Job Board API");
        assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
    }
}
