//! Request gate on database connectivity.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use database::mongodb::ConnectionMonitor;
use strum::{Display, EnumString};

use crate::error::{ProductError, ProductResult};

/// Which requests the guard checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GuardScope {
    /// Every product operation
    #[default]
    All,
    /// Only GET and HEAD; writes go straight to the driver
    Reads,
}

/// Rejects requests with 503 while the database is not connected
#[derive(Debug, Clone)]
pub struct ConnectionGuard {
    monitor: ConnectionMonitor,
    scope: GuardScope,
}

impl ConnectionGuard {
    pub fn new(monitor: ConnectionMonitor, scope: GuardScope) -> Self {
        Self { monitor, scope }
    }

    pub fn covers(&self, method: &Method) -> bool {
        match self.scope {
            GuardScope::All => true,
            GuardScope::Reads => method == Method::GET || method == Method::HEAD,
        }
    }

    pub fn check(&self, method: &Method) -> ProductResult<()> {
        if !self.covers(method) {
            return Ok(());
        }

        let state = self.monitor.state();
        if state.is_connected() {
            Ok(())
        } else {
            Err(ProductError::Unavailable(state))
        }
    }
}

/// Middleware for `axum::middleware::from_fn_with_state`
pub async fn connection_guard(
    State(guard): State<ConnectionGuard>,
    request: Request,
    next: Next,
) -> Response {
    match guard.check(request.method()) {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}
