//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use lapak_app::context::AppContext;

use crate::state::State;

/// Helpers for reaching injected state from handlers.
pub(crate) trait DepotExt {
    /// The application context, or `500` when state was never injected.
    fn app_or_500(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn app_or_500(&self) -> Result<&AppContext, StatusError> {
        self.obtain::<Arc<State>>()
            .map(|state| &state.app)
            .map_err(|_missing| {
                error!("application state missing from depot");

                StatusError::internal_server_error()
            })
    }
}
