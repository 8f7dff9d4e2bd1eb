use actix_web::web;

use crate::handlers::{profile, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(system::health_check)
        .service(profile::get_profile);
}
