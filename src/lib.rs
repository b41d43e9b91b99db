use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, web};

use repositories::{
    education::EducationRepository,
    experience::ExperienceRepository,
    profile::ProfileRepository,
};
use shared_repos::SharedRepositories;
use use_cases::{
    education::EducationHandler,
    experience::ExperienceHandler,
    profile::ProfileHandler,
};

pub type AppProfileHandler = ProfileHandler<Arc<dyn ProfileRepository>>;
pub type AppExperienceHandler = ExperienceHandler<Arc<dyn ExperienceRepository>>;
pub type AppEducationHandler = EducationHandler<Arc<dyn EducationRepository>>;

/// Per-process context handed to every request through `web::Data`.
pub struct AppState {
    pub profile_handler: AppProfileHandler,
    pub experience_handler: AppExperienceHandler,
    pub education_handler: AppEducationHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let repos = SharedRepositories::new(pool);

        Self::with_repositories(
            Arc::new(repos.profile_repo),
            Arc::new(repos.experience_repo),
            Arc::new(repos.education_repo),
        )
    }

    pub fn with_repositories(
        profile_repo: Arc<dyn ProfileRepository>,
        experience_repo: Arc<dyn ExperienceRepository>,
        education_repo: Arc<dyn EducationRepository>,
    ) -> Self {
        AppState {
            profile_handler: ProfileHandler::new(profile_repo),
            experience_handler: ExperienceHandler::new(experience_repo),
            education_handler: EducationHandler::new(education_repo),
        }
    }
}
