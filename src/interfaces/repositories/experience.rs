use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::experience::{Experience, ExperienceInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxExperienceRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Inserts one row and returns it with its assigned id
    async fn create_experience(&self, insert: &ExperienceInsert) -> Result<Experience, AppError>;

    /// Every stored experience, ascending id
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError>;
}

#[async_trait]
impl<T> ExperienceRepository for Arc<T>
where
    T: ExperienceRepository + ?Sized,
{
    async fn create_experience(&self, insert: &ExperienceInsert) -> Result<Experience, AppError> {
        (**self).create_experience(insert).await
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        (**self).list_experiences().await
    }
}

impl SqlxExperienceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxExperienceRepo { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepo {
    async fn create_experience(&self, insert: &ExperienceInsert) -> Result<Experience, AppError> {
        let mut conn = self.pool.acquire().await?;

        let experience = sqlx::query_as::<_, Experience>(
            r#"
            INSERT INTO experiences (title, company, start_date, end_date, profile_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, company, start_date, end_date, profile_id
            "#,
        )
        .bind(&insert.title)
        .bind(&insert.company)
        .bind(&insert.start_date)
        .bind(&insert.end_date)
        .bind(insert.profile_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(experience)
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let experiences = sqlx::query_as::<_, Experience>(
            r#"
            SELECT id, title, company, start_date, end_date, profile_id
            FROM experiences
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(experiences)
    }
}
