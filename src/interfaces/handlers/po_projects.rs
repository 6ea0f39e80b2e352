use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::po_project::{NewPoProjectRequest, PoProject, UpdatePoProjectRequest},
    errors::AppError,
    handlers::deleted,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_po_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let records = state.po_project_handler.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(state, data))]
pub async fn create_po_project(
    state: web::Data<AppState>,
    data: web::Json<NewPoProjectRequest>,
) -> Result<impl Responder, AppError> {
    let record = state.po_project_handler.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

#[instrument(skip(state, data))]
pub async fn update_po_project(
    po_project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdatePoProjectRequest>,
) -> Result<impl Responder, AppError> {
    let record = state
        .po_project_handler
        .update(&po_project_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

#[instrument(skip(state))]
pub async fn delete_po_project(
    po_project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.po_project_handler.delete(&po_project_id).await?;
    Ok(deleted::<PoProject>())
}
