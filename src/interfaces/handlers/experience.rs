use actix_web::{web, Error, HttpResponse, Responder};

use crate::{entities::experience::NewExperience, use_cases::extractors::JsonBody, AppState};

pub async fn create_experience(
    state: web::Data<AppState>,
    payload: JsonBody<NewExperience>,
) -> Result<impl Responder, Error> {
    let response = state.experience_handler
        .create_experience(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

pub async fn list_experiences(state: web::Data<AppState>) -> Result<impl Responder, Error> {
    let experiences = state.experience_handler.list_experiences().await?;

    Ok(HttpResponse::Ok().json(experiences))
}
