use actix_web::web;

use crate::handlers::{education, experience, profile};

// Paths are registered without the trailing slash; `NormalizePath::trim`
// folds `/about/` onto `/about`.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/about")
            .route(web::post().to(profile::create_profile))
    )
    .service(
        web::resource("/about-get")
            .route(web::get().to(profile::list_profiles))
    )
    .service(
        web::resource("/experience")
            .route(web::post().to(experience::create_experience))
    )
    .service(
        web::resource("/experience-get")
            .route(web::get().to(experience::list_experiences))
    )
    .service(
        web::resource("/education")
            .route(web::post().to(education::create_education))
    )
    .service(
        web::resource("/education-get")
            .route(web::get().to(education::list_educations))
    );
}
