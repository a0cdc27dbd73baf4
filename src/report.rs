use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::approval_processor::Decision;
use crate::domain::Amount;
use crate::pipeline::ApprovalResult;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Approved,
    ManualReview,
}

#[derive(Serialize, Debug)]
struct DecisionRow<'a> {
    id: &'a str,
    customer: &'a str,
    amount: Amount,
    outcome: Outcome,
    handler: &'a str,
}

impl<'a> From<&'a Decision> for DecisionRow<'a> {
    fn from(decision: &'a Decision) -> Self {
        let (outcome, handler) = match &decision.result {
            ApprovalResult::Approved { handler_name } => (Outcome::Approved, handler_name.as_str()),
            ApprovalResult::Unhandled => (Outcome::ManualReview, ""),
        };

        DecisionRow {
            id: &decision.request_id,
            customer: &decision.customer_id,
            amount: decision.amount,
            outcome,
            handler,
        }
    }
}

/// Writes `id,customer,amount,outcome,handler`, one row per decision.
pub fn write_decisions<W: Write>(writer: W, decisions: &[Decision]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // serialize() only emits a header once a row is written
    if decisions.is_empty() {
        csv_writer.write_record(["id", "customer", "amount", "outcome", "handler"])?;
    }
    for decision in decisions {
        csv_writer.serialize(DecisionRow::from(decision))?;
    }

    csv_writer.flush()?;
    Ok(())
}
