use actix_web::{web, Error, HttpResponse, Responder};

use crate::{entities::profile::NewProfile, use_cases::extractors::JsonBody, AppState};

pub async fn create_profile(
    state: web::Data<AppState>,
    payload: JsonBody<NewProfile>,
) -> Result<impl Responder, Error> {
    let response = state.profile_handler
        .create_profile(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

pub async fn list_profiles(state: web::Data<AppState>) -> Result<impl Responder, Error> {
    let profiles = state.profile_handler.list_profiles().await?;

    Ok(HttpResponse::Ok().json(profiles))
}
