use actix_web::web;

use crate::handlers::academic;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/academicInformation")
            .service(
                web::resource("")
                    .route(web::get().to(academic::list_own_academic))
                    .route(web::post().to(academic::create_academic)),
            )
            .service(web::resource("/user/{user_id}").route(web::get().to(academic::list_academic_for_user)))
            .service(
                web::resource("/{record_id}")
                    .route(web::put().to(academic::update_academic))
                    .route(web::delete().to(academic::delete_academic)),
            ),
    );
}
