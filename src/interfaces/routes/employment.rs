use actix_web::web;

use crate::handlers::employment;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employmentInformation")
            .service(
                web::resource("")
                    .route(web::get().to(employment::list_own_employment))
                    .route(web::post().to(employment::create_employment)),
            )
            .service(web::resource("/user/{user_id}").route(web::get().to(employment::list_employment_for_user)))
            .service(
                web::resource("/{record_id}")
                    .route(web::put().to(employment::update_employment))
                    .route(web::delete().to(employment::delete_employment)),
            ),
    );
}
