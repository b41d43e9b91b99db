use actix_web::{web, Error, HttpResponse, Responder};

use crate::{entities::education::NewEducation, use_cases::extractors::JsonBody, AppState};

pub async fn create_education(
    state: web::Data<AppState>,
    payload: JsonBody<NewEducation>,
) -> Result<impl Responder, Error> {
    let response = state.education_handler
        .create_education(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

pub async fn list_educations(state: web::Data<AppState>) -> Result<impl Responder, Error> {
    let educations = state.education_handler.list_educations().await?;

    Ok(HttpResponse::Ok().json(educations))
}
