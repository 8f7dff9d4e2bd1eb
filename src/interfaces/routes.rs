use actix_web::web;

use crate::handlers::home::home;

mod admin;
mod auth;
mod blog;
mod json_error;
mod projects;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(system::config_routes)
            .configure(auth::config_routes)
            .configure(blog::config_routes)
            .configure(projects::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
