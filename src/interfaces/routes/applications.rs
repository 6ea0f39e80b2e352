use actix_web::web;
use crate::handlers::job_applications;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/job-applications")
            .service(
                web::resource("")
                    .route(web::get().to(job_applications::list_job_applications))
                    .route(web::post().to(job_applications::create_job_application))
            )
            .service(
                web::resource("/{application_id}")
                    .route(web::delete().to(job_applications::delete_job_application))
            )
            .service(
                web::resource("/{application_id}/status")
                    .route(web::put().to(job_applications::update_application_status))
            )
    );
}
