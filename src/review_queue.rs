use crate::domain::TransactionRequest;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Requests no approver claimed, grouped by customer, waiting for a human.
#[derive(Debug, Default)]
pub struct ReviewQueue {
    pending_by_customer: RwLock<HashMap<String, Vec<TransactionRequest>>>,
}

impl ReviewQueue {
    pub fn new() -> Self {
        ReviewQueue {
            pending_by_customer: RwLock::new(HashMap::new()),
        }
    }

    // Enqueue an unhandled request under its customer
    pub fn enqueue(&self, request: TransactionRequest) {
        info!(
            customer_id = %request.customer_id,
            request_id = %request.id,
            amount = request.amount,
            "Routed transaction to manual review"
        );

        self.write()
            .entry(request.customer_id.clone())
            .or_default()
            .push(request);
    }

    // Drop everything pending for a customer
    pub fn remove_customer(&self, customer_id: &str) -> Option<Vec<TransactionRequest>> {
        let removed = self.write().remove(customer_id);
        info!(customer_id, "Removed customer from review queue");
        removed
    }

    pub fn pending_for_customer(&self, customer_id: &str) -> Option<Vec<TransactionRequest>> {
        self.read().get(customer_id).cloned()
    }

    /// Total pending requests across all customers.
    pub fn len(&self) -> usize {
        self.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<TransactionRequest>>> {
        self.pending_by_customer
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<TransactionRequest>>> {
        self.pending_by_customer
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
