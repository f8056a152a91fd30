//! Create Payment Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use lapak_app::domain::purchases::models::PurchaseId;

use crate::{
    extensions::*,
    observability::{PaymentOutcome, record_payment},
    purchases::{
        errors::into_status_error, requests::CreatePaymentRequest,
        responses::PaymentReceivedResponse,
    },
};

/// Create Payment Handler
///
/// Accepts one proof-of-transfer file per seller owed, marks the purchase
/// paid and takes the purchased quantities out of stock.
#[endpoint(
    tags("purchases"),
    summary = "Create Payment",
    responses(
        (status_code = StatusCode::CREATED, description = "Payment received"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Purchase not found"),
        (status_code = StatusCode::CONFLICT, description = "Purchase already paid"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    purchase: PathParam<String>,
    json: JsonBody<CreatePaymentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentReceivedResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let purchase = purchase.into_inner().parse::<PurchaseId>().or_404()?;

    let request = json
        .into_inner()
        .validated_or_400("Invalid payment payload")?;

    app.purchases
        .create_payment(purchase, request.into())
        .await
        .map_err(|error| {
            record_payment(PaymentOutcome::from_error(&error));
            into_status_error(error)
        })?;

    record_payment(PaymentOutcome::Received);

    res.status_code(StatusCode::CREATED);

    Ok(Json(PaymentReceivedResponse::created()))
}
