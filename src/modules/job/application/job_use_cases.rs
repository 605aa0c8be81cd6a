use std::sync::Arc;

use crate::job::application::ports::incoming::use_cases::{
    ApplyToJobUseCase, CreateJobUseCase, GetJobUseCase, ListJobsUseCase, ListRandomJobsUseCase,
    ToggleFavoriteUseCase,
};

#[derive(Clone)]
pub struct JobUseCases {
    pub list: Arc<dyn ListJobsUseCase + Send + Sync>,
    pub get: Arc<dyn GetJobUseCase + Send + Sync>,
    pub random: Arc<dyn ListRandomJobsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateJobUseCase + Send + Sync>,
    pub apply: Arc<dyn ApplyToJobUseCase + Send + Sync>,
    pub toggle_favorite: Arc<dyn ToggleFavoriteUseCase + Send + Sync>,
}
