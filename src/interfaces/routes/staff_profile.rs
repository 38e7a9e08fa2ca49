use actix_web::web;

use crate::handlers::staff_profile;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/staffProfile/me")
            .route(web::get().to(staff_profile::get_own_staff_profile))
            .route(web::put().to(staff_profile::upsert_own_staff_profile)),
    );
}
