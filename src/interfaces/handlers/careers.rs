use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::career::{Career, NewCareerRequest, UpdateCareerRequest},
    errors::AppError,
    handlers::deleted,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_careers(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let careers = state.career_handler.list().await?;
    Ok(HttpResponse::Ok().json(careers))
}

/// Public listing: only postings still open.
#[instrument(skip(state))]
pub async fn list_active_careers(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let careers = state.career_handler.list_active().await?;
    Ok(HttpResponse::Ok().json(careers))
}

#[instrument(skip(state))]
pub async fn get_career(
    career_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let career = state.career_handler.get(&career_id).await?;
    Ok(HttpResponse::Ok().json(career))
}

#[instrument(skip(state, data))]
pub async fn create_career(
    state: web::Data<AppState>,
    data: web::Json<NewCareerRequest>,
) -> Result<impl Responder, AppError> {
    let career = state.career_handler.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(career))
}

#[instrument(skip(state, data))]
pub async fn update_career(
    career_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateCareerRequest>,
) -> Result<impl Responder, AppError> {
    let career = state
        .career_handler
        .update(&career_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(career))
}

#[instrument(skip(state))]
pub async fn delete_career(
    career_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.career_handler.delete(&career_id).await?;
    Ok(deleted::<Career>())
}
