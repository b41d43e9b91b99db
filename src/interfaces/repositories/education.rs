use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::education::{Education, EducationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxEducationRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create_education(&self, insert: &EducationInsert) -> Result<Education, AppError>;
    async fn list_educations(&self) -> Result<Vec<Education>, AppError>;
}

#[async_trait]
impl<T> EducationRepository for Arc<T>
where
    T: EducationRepository + ?Sized,
{
    async fn create_education(&self, insert: &EducationInsert) -> Result<Education, AppError> {
        (**self).create_education(insert).await
    }

    async fn list_educations(&self) -> Result<Vec<Education>, AppError> {
        (**self).list_educations().await
    }
}

impl SqlxEducationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEducationRepo { pool }
    }
}

#[async_trait]
impl EducationRepository for SqlxEducationRepo {
    async fn create_education(&self, insert: &EducationInsert) -> Result<Education, AppError> {
        let mut conn = self.pool.acquire().await?;

        let education = sqlx::query_as::<_, Education>(
            r#"
            INSERT INTO educations (title, institution, degree, start_date, end_date, profile_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, institution, degree, start_date, end_date, profile_id
            "#,
        )
        .bind(&insert.title)
        .bind(&insert.institution)
        .bind(&insert.degree)
        .bind(&insert.start_date)
        .bind(&insert.end_date)
        .bind(insert.profile_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(education)
    }

    async fn list_educations(&self) -> Result<Vec<Education>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let educations = sqlx::query_as::<_, Education>(
            r#"
            SELECT id, title, institution, degree, start_date, end_date, profile_id
            FROM educations
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(educations)
    }
}
