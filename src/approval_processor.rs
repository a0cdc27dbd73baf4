use std::{
    collections::BTreeMap,
    sync::Arc,
};

use tracing::info;

use crate::{
    domain::{
        Amount,
        TransactionRequest,
    },
    pipeline::{
        ApprovalResult,
        EscalationPipeline,
    },
    review_queue::ReviewQueue,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub request_id: String,
    pub customer_id: String,
    pub amount: Amount,
    pub result: ApprovalResult,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    /// One entry per request, in input order.
    pub decisions: Vec<Decision>,
    pub approvals_by_handler: BTreeMap<String, usize>,
    pub unhandled: usize,
}

pub struct ApprovalProcessor {
    pipeline: Arc<EscalationPipeline>,
}

impl ApprovalProcessor {
    pub fn new(pipeline: Arc<EscalationPipeline>) -> Self {
        ApprovalProcessor { pipeline }
    }

    /// Runs every request through the pipeline one at a time, in order.
    /// Approved: counted against the approving handler.
    /// Unhandled: counted and pushed onto `review_queue` for a human to pick up.
    pub fn process_batch(
        &self,
        requests: &[TransactionRequest],
        review_queue: &ReviewQueue,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for request in requests {
            let result = self.pipeline.evaluate(request);

            match &result {
                ApprovalResult::Approved { handler_name } => {
                    *summary
                        .approvals_by_handler
                        .entry(handler_name.clone())
                        .or_default() += 1;
                }
                ApprovalResult::Unhandled => {
                    summary.unhandled += 1;
                    review_queue.enqueue(request.clone());
                }
            }

            summary.decisions.push(Decision {
                request_id: request.id.clone(),
                customer_id: request.customer_id.clone(),
                amount: request.amount,
                result,
            });
        }

        info!(
            processed = summary.decisions.len(),
            unhandled = summary.unhandled,
            "Processed approval batch"
        );
        summary
    }
}
