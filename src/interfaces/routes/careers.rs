use actix_web::web;
use crate::handlers::careers;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/careers")
            .service(
                web::resource("")
                    .route(web::get().to(careers::list_careers))
                    .route(web::post().to(careers::create_career))
            )
            // must precede "/{career_id}"
            .service(
                web::resource("/active")
                    .route(web::get().to(careers::list_active_careers))
            )
            .service(
                web::resource("/{career_id}")
                    .route(web::get().to(careers::get_career))
                    .route(web::put().to(careers::update_career))
                    .route(web::delete().to(careers::delete_career))
            )
    );
}
