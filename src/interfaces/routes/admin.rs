use actix_web::web;

use crate::handlers::{blog_posts, projects, users};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/blog")
                    .route(web::get().to(blog_posts::get_all_posts))
            )
            .service(
                web::resource("/projects")
                    .route(web::get().to(projects::get_all_projects))
            )
            .service(
                web::resource("/change-password")
                    .route(web::put().to(users::change_password))
            )
    );
}
