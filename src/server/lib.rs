use actix_session::{
    config::{PersistentSession, SessionMiddlewareBuilder},
    storage::RedisSessionStore,
};
use actix_web::{cookie, web::scope, Scope};
use common::settings::types::Settings;
use web_adapters::{card_routes, dashboard_routes, user_routes};

pub use web_adapters::auth_middleware::AuthenticateUser;

pub async fn get_preps_for_redis_session_store(
    settings: &Settings,
) -> Result<(RedisSessionStore, cookie::Key), std::io::Error> {
    let secret_key = cookie::Key::from(settings.secret.hmac_secret.as_bytes());
    let redis_store = RedisSessionStore::new(settings.redis.url.as_str())
        .await
        .map_err(|e| std::io::Error::other(format!("Error on getting RedisSessionStore: {e}")))?;
    Ok((redis_store, secret_key))
}

pub fn setup_session_middleware_builder(
    builder: SessionMiddlewareBuilder<RedisSessionStore>,
    settings: &Settings,
) -> SessionMiddlewareBuilder<RedisSessionStore> {
    let builder = builder
        .session_lifecycle(PersistentSession::default().session_ttl(
            cookie::time::Duration::days(settings.secret.session_ttl_days),
        ))
        .cookie_name("sessionId".to_string());
    if settings.debug {
        builder
            .cookie_same_site(cookie::SameSite::None)
            .cookie_secure(false)
    } else {
        builder
    }
}

pub fn get_routes() -> Scope {
    scope("/api")
        .service(health_check)
        .configure(user_routes)
        .configure(dashboard_routes)
        .configure(card_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
