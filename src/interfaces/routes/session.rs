use actix_web::web;

use crate::handlers::session;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(session::get_session);
}
