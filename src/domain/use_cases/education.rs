use crate::{
    entities::education::{EducationResponse, NewEducation},
    errors::AppError,
    repositories::education::EducationRepository,
};

pub struct EducationHandler<R>
where
    R: EducationRepository,
{
    pub education_repo: R,
}

impl<R> EducationHandler<R>
where
    R: EducationRepository,
{
    pub fn new(education_repo: R) -> Self {
        EducationHandler { education_repo }
    }

    pub async fn create_education(
        &self,
        request: NewEducation
    ) -> Result<EducationResponse, AppError> {
        let insert = request.prepare_for_insert();
        let education = self.education_repo.create_education(&insert).await?;

        tracing::info!(education_id = education.id, "Created education");

        Ok(education.into())
    }

    pub async fn list_educations(&self) -> Result<Vec<EducationResponse>, AppError> {
        let educations = self.education_repo.list_educations().await?;

        Ok(educations.into_iter().map(EducationResponse::from).collect())
    }
}
