use actix_web::web;

/// Bodies are buffered in full before parsing, so some ceiling is needed.
/// Text columns are unbounded; 1 MiB leaves room for a long `bio`.
pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(BODY_LIMIT));
}
