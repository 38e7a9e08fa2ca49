use actix_web::web;

use crate::handlers::reports;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/graduateReports").route(web::get().to(reports::graduate_report)));
}
