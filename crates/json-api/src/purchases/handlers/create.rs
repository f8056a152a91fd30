//! Create Purchase Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    observability::record_purchase_created,
    purchases::{
        errors::into_status_error, requests::CreatePurchaseRequest,
        responses::PurchaseCreatedResponse,
    },
};

/// Create Purchase Handler
///
/// Prices the cart, splits it into one bank transfer per seller and records
/// the purchase. Stock is left untouched until payment arrives.
#[endpoint(
    tags("purchases"),
    summary = "Create Purchase",
    responses(
        (status_code = StatusCode::CREATED, description = "Purchase created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Purchase conflicts with an existing record"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePurchaseRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PurchaseCreatedResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let request = json
        .into_inner()
        .validated_or_400("Invalid purchase payload")?;

    let receipt = app
        .purchases
        .create_purchase(request.into())
        .await
        .map_err(into_status_error)?;

    record_purchase_created(receipt.payment_details.len());

    res.add_header(
        LOCATION,
        format!("/v1/purchase/{}", receipt.purchase_id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(receipt.into()))
}
