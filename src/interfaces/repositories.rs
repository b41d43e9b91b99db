pub mod education;
pub mod experience;
pub mod profile;
pub mod sqlx_repo;
