use actix_web::web;

use crate::handlers::location;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/location")
            .service(web::resource("").route(web::post().to(location::record_location)))
            .service(web::resource("/me").route(web::get().to(location::latest_own_location))),
    )
    .service(web::resource("/map").route(web::get().to(location::graduate_map)));
}
