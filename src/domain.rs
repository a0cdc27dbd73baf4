pub type Amount = f64;

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub id: String,
    #[serde(rename = "customer")]
    pub customer_id: String,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    /// Informational only, never consulted for routing.
    pub priority: Priority,
}

impl TransactionRequest {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        amount: Amount,
        kind: TransactionKind,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        TransactionRequest {
            id: id.into(),
            customer_id: customer_id.into(),
            amount,
            kind,
            description: description.into(),
            priority,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Transfer,
    Withdrawal,
    Deposit,
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}
