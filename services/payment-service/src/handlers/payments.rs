use axum::Json;

use crate::models::PaymentsResponse;

/// GET /payments
pub async fn list_payments() -> Json<PaymentsResponse> {
    Json(PaymentsResponse::current())
}
