use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod catalogue;
mod careers;
mod applications;
mod contact;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .service(health_check)
            .configure(catalogue::config_routes)
            .configure(careers::config_routes)
            .configure(applications::config_routes)
            .configure(contact::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
