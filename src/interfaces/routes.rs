use actix_web::web;

use crate::{constants::API_PREFIX, handlers::home::home};

mod academic;
mod admin;
mod auth;
mod basic_information;
mod employment;
mod json_error;
mod location;
mod news;
mod reports;
mod session;
mod staff_profile;
mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope(API_PREFIX)
            .configure(auth::config_routes)
            .configure(session::config_routes)
            .configure(admin::config_routes)
            .configure(users::config_routes)
            .configure(basic_information::config_routes)
            .configure(academic::config_routes)
            .configure(employment::config_routes)
            .configure(staff_profile::config_routes)
            .configure(news::config_routes)
            .configure(location::config_routes)
            .configure(reports::config_routes),
    );

    cfg.configure(json_error::config_routes);
}
