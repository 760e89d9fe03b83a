use serde::Serialize;

/// Settled payment identifiers, in ledger order.
const PAYMENTS: [&str; 2] = ["payment1", "payment2"];

#[derive(Debug, Clone, Serialize)]
pub struct PaymentsResponse {
    pub payments: Vec<String>,
}

impl PaymentsResponse {
    /// Snapshot of the payment ledger. Order is stable across calls.
    pub fn current() -> Self {
        Self {
            payments: PAYMENTS.iter().map(|payment| payment.to_string()).collect(),
        }
    }
}
