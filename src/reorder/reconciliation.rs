use std::{fmt, future::Future};

use tracing::{event, Level};

use crate::types::{OrderObject, ReorderRequest};

pub const REORDER_FAILED_MESSAGE: &str = "Couldn't reorder, please try again";

#[derive(Debug, Clone, PartialEq)]
pub enum ReorderError {
    Validation(String),
    Server(String),
    Network(String),
}

impl ReorderError {
    /// Classifies a non-success response of the reorder procedure. A rejected
    /// batch (400) is a validation error; anything else is a server error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            400 => ReorderError::Validation(message.into()),
            _ => ReorderError::Server(message.into()),
        }
    }
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderError::Validation(message) => write!(f, "Validation: {}", message),
            ReorderError::Server(message) => write!(f, "Server: {}", message),
            ReorderError::Network(message) => write!(f, "Network: {}", message),
        }
    }
}

/// The query cache entry of the list being reordered.
pub trait QueryCache {
    /// Aborts an in-flight fetch so a stale response cannot overwrite the
    /// optimistic order.
    fn cancel(&mut self);
    /// Marks the list stale and triggers a background refetch.
    fn invalidate(&mut self);
}

/// Transient notifications (toasts).
pub trait Notifier {
    fn error(&self, message: &str);
}

/// The server procedure persisting a batch of positions.
pub trait ReorderProcedure<Id> {
    fn reorder(
        &self,
        request: ReorderRequest<Id>,
    ) -> impl Future<Output = Result<Vec<OrderObject<Id>>, ReorderError>>;
}

/// Sends one reorder batch. Meant to be spawned right after the optimistic
/// update; failures end in a notification and never reach the caller.
///
/// A failure does not roll the local order back: it stays displayed until the
/// next fetch of the list replaces it.
pub async fn persist_reorder<Id, P, C, N>(
    request: ReorderRequest<Id>,
    procedure: &P,
    cache: &mut C,
    notifier: &N,
) -> Option<Vec<OrderObject<Id>>>
where
    P: ReorderProcedure<Id>,
    C: QueryCache,
    N: Notifier,
{
    if request.is_empty() {
        return None;
    }

    cache.cancel();
    match procedure.reorder(request).await {
        Ok(updated) => {
            cache.invalidate();
            Some(updated)
        }
        Err(e) => {
            event!(target: "reorder", Level::WARN, "Failed to persist reorder: {}", e);
            notifier.error(REORDER_FAILED_MESSAGE);
            None
        }
    }
}
