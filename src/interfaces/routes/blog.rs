use actix_web::web;

use crate::handlers::blog_posts;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("")
                    .route(web::get().to(blog_posts::get_published_posts))
                    .route(web::post().to(blog_posts::create_post))
            )
            // Reads address posts by slug, writes by numeric id.
            .service(
                web::resource("/{key}")
                    .route(web::get().to(blog_posts::get_post_by_slug))
                    .route(web::put().to(blog_posts::update_post))
                    .route(web::delete().to(blog_posts::delete_post))
            )
    );
}
