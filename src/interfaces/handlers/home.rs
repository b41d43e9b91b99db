use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Resume API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /about/", "GET /about-get/",
            "POST /experience/", "GET /experience-get/",
            "POST /education/", "GET /education-get/"
        ]
    }))
}
