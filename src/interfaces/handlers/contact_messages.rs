use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact_message::{ContactMessage, MessageStatusUpdate, NewContactMessageRequest},
    errors::AppError,
    handlers::{deleted, limit_submission},
    AppState,
};

#[instrument(skip(state))]
pub async fn list_contact_messages(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[instrument(skip(req, state, data))]
pub async fn create_contact_message(
    req: HttpRequest,
    state: web::Data<AppState>,
    data: web::Json<NewContactMessageRequest>,
) -> Result<impl Responder, AppError> {
    limit_submission(&req, &state)?;

    let message = state.contact_handler.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(message))
}

#[instrument(skip(state, data))]
pub async fn update_message_status(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<MessageStatusUpdate>,
) -> Result<impl Responder, AppError> {
    let message = state
        .contact_handler
        .update_status(&message_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(state))]
pub async fn delete_contact_message(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.contact_handler.delete(&message_id).await?;
    Ok(deleted::<ContactMessage>())
}
