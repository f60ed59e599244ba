use actix_web::web::{scope, ServiceConfig};

mod get_user;
pub mod types;

pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/users").service(get_user::get_user));
}
