use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgConnection;

use crate::{
    entities::{
        education::Education,
        experience::Experience,
        profile::{attach_history, Profile, ProfileInsert, ProfileResponse},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;

    /// Inserts the profile and returns it together with any experience or
    /// education rows that already point at the new id
    async fn create_profile(&self, insert: &ProfileInsert) -> Result<ProfileResponse, AppError>;

    /// Every stored profile with its history, ascending id
    async fn list_profiles(&self) -> Result<Vec<ProfileResponse>, AppError>;
}

#[async_trait]
impl<T> ProfileRepository for Arc<T>
where
    T: ProfileRepository + ?Sized,
{
    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }

    async fn create_profile(&self, insert: &ProfileInsert) -> Result<ProfileResponse, AppError> {
        (**self).create_profile(insert).await
    }

    async fn list_profiles(&self) -> Result<Vec<ProfileResponse>, AppError> {
        (**self).list_profiles().await
    }
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn create_profile(&self, insert: &ProfileInsert) -> Result<ProfileResponse, AppError> {
        let mut conn = self.pool.acquire().await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (name, bio)
            VALUES ($1, $2)
            RETURNING id, name, bio
            "#,
        )
        .bind(&insert.name)
        .bind(&insert.bio)
        .fetch_one(&mut *conn)
        .await?;

        let mut responses = load_history(&mut conn, vec![profile]).await?;

        responses
            .pop()
            .ok_or_else(|| AppError::InternalError("Inserted profile was not returned".into()))
    }

    async fn list_profiles(&self) -> Result<Vec<ProfileResponse>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let profiles = sqlx::query_as::<_, Profile>(
            r#"SELECT id, name, bio FROM profiles ORDER BY id ASC"#
        )
        .fetch_all(&mut *conn)
        .await?;

        let responses = load_history(&mut conn, profiles).await?;

        Ok(responses)
    }
}

async fn load_history(
    conn: &mut PgConnection,
    profiles: Vec<Profile>,
) -> Result<Vec<ProfileResponse>, sqlx::Error> {
    if profiles.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = profiles.iter().map(|p| p.id).collect();

    let experiences = sqlx::query_as::<_, Experience>(
        r#"
        SELECT id, title, company, start_date, end_date, profile_id
        FROM experiences
        WHERE profile_id = ANY($1)
        ORDER BY id ASC
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    let educations = sqlx::query_as::<_, Education>(
        r#"
        SELECT id, title, institution, degree, start_date, end_date, profile_id
        FROM educations
        WHERE profile_id = ANY($1)
        ORDER BY id ASC
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    Ok(attach_history(profiles, experiences, educations))
}
