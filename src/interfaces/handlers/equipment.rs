use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::equipment::{Equipment, NewEquipmentRequest, UpdateEquipmentRequest},
    errors::AppError,
    handlers::deleted,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_equipment(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let equipment = state.equipment_handler.list().await?;
    Ok(HttpResponse::Ok().json(equipment))
}

#[instrument(skip(state, data))]
pub async fn create_equipment(
    state: web::Data<AppState>,
    data: web::Json<NewEquipmentRequest>,
) -> Result<impl Responder, AppError> {
    let item = state.equipment_handler.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(item))
}

#[instrument(skip(state, data))]
pub async fn update_equipment(
    equipment_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateEquipmentRequest>,
) -> Result<impl Responder, AppError> {
    let item = state
        .equipment_handler
        .update(&equipment_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(item))
}

#[instrument(skip(state))]
pub async fn delete_equipment(
    equipment_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.equipment_handler.delete(&equipment_id).await?;
    Ok(deleted::<Equipment>())
}
