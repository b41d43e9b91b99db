use actix_web::web;

use crate::handlers::{home::home, system::health_check};

pub mod payload;
mod resume;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(resume::config_routes);
    cfg.configure(payload::config_routes);
}
