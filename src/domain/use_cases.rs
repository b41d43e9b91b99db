pub mod education;
pub mod extractors;
pub mod experience;
pub mod profile;
