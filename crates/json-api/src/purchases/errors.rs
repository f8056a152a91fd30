//! Errors

use std::error::Error;

use salvo::http::StatusError;
use tracing::error;

use lapak_app::domain::purchases::{ErrorKind, PurchasesServiceError};

pub(crate) fn into_status_error(error: PurchasesServiceError) -> StatusError {
    match error.kind() {
        ErrorKind::InvalidRequest => StatusError::bad_request().brief(error.to_string()),
        ErrorKind::NotFound => StatusError::not_found().brief("Purchase not found"),
        ErrorKind::Conflict => StatusError::conflict().brief(error.to_string()),
        ErrorKind::Internal => {
            error!(chain = %source_chain(&error), "purchase request failed");

            StatusError::internal_server_error()
        }
    }
}

fn source_chain(error: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(error), |&current| current.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
