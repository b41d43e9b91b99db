use sqlx::PgPool;
use tracing::info;

// `profile_id` carries no REFERENCES clause: children may point at a profile
// that does not exist (yet).
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS profiles (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        bio TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_profiles_name ON profiles (name)",
    r#"
    CREATE TABLE IF NOT EXISTS experiences (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        company TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        profile_id BIGINT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_experiences_title ON experiences (title)",
    "CREATE INDEX IF NOT EXISTS ix_experiences_company ON experiences (company)",
    "CREATE INDEX IF NOT EXISTS ix_experiences_profile_id ON experiences (profile_id)",
    r#"
    CREATE TABLE IF NOT EXISTS educations (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        institution TEXT NOT NULL,
        degree TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        profile_id BIGINT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_educations_institution ON educations (institution)",
    "CREATE INDEX IF NOT EXISTS ix_educations_degree ON educations (degree)",
    "CREATE INDEX IF NOT EXISTS ix_educations_profile_id ON educations (profile_id)",
];

/// Creates the resume tables if they are missing. Safe to run on every start.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(*statement).execute(pool).await?;
    }

    info!("Database schema ready ({} statements).", SCHEMA.len());
    Ok(())
}
