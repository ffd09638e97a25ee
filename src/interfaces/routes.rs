use actix_web::web;

use crate::handlers::{blog, contact, home::home, portfolio, system};

mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .route("/contact", web::post().to(contact::submit_contact))
            .route("/projects", web::get().to(portfolio::list_projects))
            .route("/projects/{id}", web::get().to(portfolio::get_project))
            .route("/posts", web::get().to(blog::list_posts))
            .service(system::health_check),
    );

    cfg.configure(json_error::config_routes);
}
