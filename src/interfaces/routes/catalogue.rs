use actix_web::web;
use crate::handlers::{equipment, po_projects, projects};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::put().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project))
            )
    );

    cfg.service(
        web::scope("/equipment")
            .service(
                web::resource("")
                    .route(web::get().to(equipment::list_equipment))
                    .route(web::post().to(equipment::create_equipment))
            )
            .service(
                web::resource("/{equipment_id}")
                    .route(web::put().to(equipment::update_equipment))
                    .route(web::delete().to(equipment::delete_equipment))
            )
    );

    cfg.service(
        web::scope("/po-projects")
            .service(
                web::resource("")
                    .route(web::get().to(po_projects::list_po_projects))
                    .route(web::post().to(po_projects::create_po_project))
            )
            .service(
                web::resource("/{po_project_id}")
                    .route(web::put().to(po_projects::update_po_project))
                    .route(web::delete().to(po_projects::delete_po_project))
            )
    );
}
