use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_session::{Session, SessionExt};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::Data,
    Error, HttpMessage,
};
use db_adapters::user_adapter::{UserAdapter, UserFilter, UserQuery};
use futures::future::LocalBoxFuture;
use sea_orm::DbConn;
use tracing::{event, Level};

use crate::users::types::USER_ID_KEY;

/// Resolves the session's user and stores it in the request extensions, where
/// endpoints read it as `Option<ReqData<user::Model>>`. Requests without a
/// valid session pass through untouched.
pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            if let Some(user_id) = session_user_id(&req.get_session()) {
                if let Some(db) = req.app_data::<Data<DbConn>>() {
                    match UserAdapter::init(db)
                        .filter_eq_is_active(true)
                        .get_by_id(user_id)
                        .await
                    {
                        Ok(Some(user)) => {
                            req.extensions_mut().insert(user);
                        }
                        Ok(None) => (),
                        Err(e) => {
                            event!(target: "backend", Level::ERROR, "Failed to load session user: {:?}", e)
                        }
                    }
                }
            }

            svc.call(req).await
        })
    }
}

fn session_user_id(session: &Session) -> Option<uuid::Uuid> {
    match session.get::<uuid::Uuid>(USER_ID_KEY) {
        Ok(user_id) => user_id,
        Err(e) => {
            event!(target: "backend", Level::WARN, "Invalid session: {}", e);
            None
        }
    }
}
