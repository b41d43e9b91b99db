pub mod education;
pub mod experience;
pub mod home;
pub mod profile;
pub mod system;
