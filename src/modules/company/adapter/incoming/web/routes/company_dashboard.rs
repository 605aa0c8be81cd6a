use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::PostingManager;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Company dashboard
///
/// Totals, the five most viewed postings and the ten latest applications.
#[utoipa::path(
    get,
    path = "/api/companies/dashboard",
    tag = "companies",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard data"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Company or admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/companies/dashboard")]
pub async fn company_dashboard_handler(
    manager: PostingManager,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .company
        .dashboard
        .execute(manager.user_id())
        .await
    {
        Ok(dashboard) => ApiResponse::success(dashboard),
        Err(e) => {
            error!(user_id = %manager.user_id(), "Failed to build company dashboard: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::company::application::domain::entities::{CompanyDashboard, CompanyStats, TopJob};
    use crate::company::application::ports::incoming::use_cases::{
        CompanyDashboardError, CompanyDashboardUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{sample_account, StubAuthenticateUseCase};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct StubDashboard;

    #[async_trait]
    impl CompanyDashboardUseCase for StubDashboard {
        async fn execute(
            &self,
            _user_id: Uuid,
        ) -> Result<CompanyDashboard, CompanyDashboardError> {
            Ok(CompanyDashboard {
                stats: CompanyStats {
                    total_jobs: 1,
                    active_jobs: 1,
                    total_views: 12,
                    total_clicks: 2,
                    total_applications: 0,
                },
                top_jobs: vec![TopJob {
                    id: Uuid::new_v4(),
                    job_title: "Rust Engineer".into(),
                    views: 12,
                    clicks: 2,
                    applications: 0,
                }],
                recent_applications: vec![],
            })
        }
    }

    #[actix_web::test]
    async fn wraps_dashboard_in_data() {
        let state = TestAppStateBuilder::default()
            .with_authenticate(Arc::new(StubAuthenticateUseCase::accepting(
                "tok",
                sample_account(Role::Company),
            )))
            .with_company_dashboard(Arc::new(StubDashboard))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(company_dashboard_handler)).await;
        let req = test::TestRequest::get()
            .uri("/api/companies/dashboard")
            .insert_header(("Authorization", "Bearer tok"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["stats"]["totalViews"], 12);
        assert_eq!(body["data"]["stats"]["totalClicks"], 2);
        assert_eq!(body["data"]["topJobs"][0]["jobTitle"], "Rust Engineer");
        assert_eq!(body["data"]["recentApplications"], serde_json::json!([]));
    }
}
