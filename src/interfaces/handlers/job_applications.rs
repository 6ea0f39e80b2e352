use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::job_application::{ApplicationStatusUpdate, JobApplication, NewJobApplicationRequest},
    errors::AppError,
    handlers::{deleted, limit_submission},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationQuery {
    pub career_id: Option<String>,
}

#[instrument(skip(state))]
pub async fn list_job_applications(
    state: web::Data<AppState>,
    query: web::Query<ApplicationQuery>,
) -> Result<impl Responder, AppError> {
    let handler = &state.application_handler;

    let applications = match query.into_inner().career_id.filter(|id| !id.trim().is_empty()) {
        Some(career_id) => handler.list_for_career(&career_id).await?,
        None => handler.list().await?,
    };

    Ok(HttpResponse::Ok().json(applications))
}

#[instrument(skip(req, state, data))]
pub async fn create_job_application(
    req: HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<NewJobApplicationRequest>,
) -> Result<impl Responder, AppError> {
    limit_submission(&req, &state)?;

    let application = state.application_handler.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(application))
}

#[instrument(skip(state, data))]
pub async fn update_application_status(
    application_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ApplicationStatusUpdate>,
) -> Result<impl Responder, AppError> {
    let application = state
        .application_handler
        .update_status(&application_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(application))
}

#[instrument(skip(state))]
pub async fn delete_job_application(
    application_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.application_handler.delete(&application_id).await?;
    Ok(deleted::<JobApplication>())
}
