use actix_web::web;

use crate::handlers::basic_information;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/basicInformation")
            .service(web::resource("").route(web::get().to(basic_information::list_basic_information)))
            .service(
                web::resource("/me")
                    .route(web::get().to(basic_information::get_own_basic_information))
                    .route(web::put().to(basic_information::upsert_own_basic_information)),
            )
            .service(
                web::resource("/{user_id}")
                    .route(web::get().to(basic_information::get_basic_information_for_user)),
            ),
    );
}
