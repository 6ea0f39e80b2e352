use actix_web::web;
use crate::handlers::contact_messages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact-messages")
            .service(
                web::resource("")
                    .route(web::get().to(contact_messages::list_contact_messages))
                    .route(web::post().to(contact_messages::create_contact_message))
            )
            .service(
                web::resource("/{message_id}")
                    .route(web::delete().to(contact_messages::delete_contact_message))
            )
            .service(
                web::resource("/{message_id}/status")
                    .route(web::put().to(contact_messages::update_message_status))
            )
    );
}
