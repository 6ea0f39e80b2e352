use actix_web::{HttpRequest, HttpResponse};

use crate::{entities::record::Record, errors::AppError, utils::get_client_ip::get_client_ip, AppState};

pub mod careers;
pub mod contact_messages;
pub mod equipment;
pub mod home;
pub mod job_applications;
pub mod po_projects;
pub mod projects;
pub mod system;

/// `200 {"message": "<Label> deleted successfully"}`
pub(crate) fn deleted<T: Record>() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("{} deleted successfully", T::LABEL)
    }))
}

/// Charges one public submission to the caller's bucket.
pub(crate) fn limit_submission(req: &HttpRequest, state: &AppState) -> Result<(), AppError> {
    let client_ip = get_client_ip(req, state.trust_x_forwarded_for);

    state.submission_limiter.check(&client_ip).map_err(|retry_after| {
        tracing::warn!(client_ip = %client_ip, retry_after, "Submission rate limit exceeded");
        AppError::TooManyRequests { retry_after }
    })
}
