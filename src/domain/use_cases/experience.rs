use crate::{
    entities::experience::{ExperienceResponse, NewExperience},
    errors::AppError,
    repositories::experience::ExperienceRepository,
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler { experience_repo }
    }

    /// Stores a new experience entry. The owning profile is not checked.
    pub async fn create_experience(
        &self,
        request: NewExperience
    ) -> Result<ExperienceResponse, AppError> {
        let insert = request.prepare_for_insert();
        let experience = self.experience_repo.create_experience(&insert).await?;

        tracing::info!(experience_id = experience.id, "Created experience");

        Ok(experience.into())
    }

    pub async fn list_experiences(&self) -> Result<Vec<ExperienceResponse>, AppError> {
        let experiences = self.experience_repo.list_experiences().await?;

        Ok(experiences.into_iter().map(ExperienceResponse::from).collect())
    }
}
