use crate::{
    entities::profile::{NewProfile, ProfileResponse},
    errors::AppError,
    repositories::profile::ProfileRepository,
};

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R) -> Self {
        ProfileHandler { profile_repo }
    }

    /// Creates a profile. `experience_id`/`education_id` from the request are
    /// accepted and dropped here.
    pub async fn create_profile(
        &self,
        request: NewProfile
    ) -> Result<ProfileResponse, AppError> {
        let insert = request.prepare_for_insert();
        let profile = self.profile_repo.create_profile(&insert).await?;

        tracing::info!(profile_id = profile.id, "Created profile");

        Ok(profile)
    }

    /// Lists all profiles with their experiences and educations
    pub async fn list_profiles(&self) -> Result<Vec<ProfileResponse>, AppError> {
        self.profile_repo.list_profiles().await
    }

    pub async fn database_ready(&self) -> bool {
        self.profile_repo.check_connection().await.is_ok()
    }
}
