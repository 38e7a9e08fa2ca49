use actix_web::web;

use crate::handlers::users;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(
                web::resource("")
                    .route(web::get().to(users::list_users))
                    .route(web::post().to(users::create_user)),
            )
            .service(web::resource("/me").route(web::get().to(users::me)))
            .service(
                web::resource("/{user_id}")
                    .route(web::get().to(users::get_user))
                    .route(web::patch().to(users::update_user))
                    .route(web::delete().to(users::delete_user)),
            ),
    );
}
