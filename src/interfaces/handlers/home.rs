use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the engineering catalogue API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/projects",
            "/api/equipment",
            "/api/po-projects",
            "/api/careers",
            "/api/job-applications",
            "/api/contact-messages",
            "/api/health"
        ]
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"error": "Route not found"}))
}
