mod cards;
mod dashboards;
mod middlewares;
mod users;
mod utils;

pub use cards::card_routes;
pub use dashboards::dashboard_routes;
pub use users::user_routes;

pub use middlewares::auth as auth_middleware;
