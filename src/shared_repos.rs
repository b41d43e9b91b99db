use crate::repositories::sqlx_repo::{SqlxEducationRepo, SqlxExperienceRepo, SqlxProfileRepo};

#[derive(Clone)]
pub struct SharedRepositories {
    pub profile_repo: SqlxProfileRepo,
    pub experience_repo: SqlxExperienceRepo,
    pub education_repo: SqlxEducationRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            profile_repo: SqlxProfileRepo::new(pool.clone()),
            experience_repo: SqlxExperienceRepo::new(pool.clone()),
            education_repo: SqlxEducationRepo::new(pool),
        }
    }
}
