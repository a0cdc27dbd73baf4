use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Amount, TransactionRequest};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("An approval chain needs at least one handler.")]
    EmptyChain,

    #[error("Handler {name} has an invalid band [{lower}, {upper:?}).")]
    InvalidBand {
        name: String,
        lower: Amount,
        upper: Option<Amount>,
    },

    #[error("Chain must start at 0, first handler {name} starts at {lower}.")]
    NonZeroStart { name: String, lower: Amount },

    #[error("Amounts in [{from}, {to}) fall between {after} and {before} and would go unhandled.")]
    Gap {
        after: String,
        before: String,
        from: Amount,
        to: Amount,
    },

    #[error("Bands of {first} and {second} overlap.")]
    Overlap { first: String, second: String },

    #[error("Handler {name} is unbounded but is not the last in the chain.")]
    UnboundedBeforeEnd { name: String },

    #[error("Last handler {name} stops at {upper}; amounts above it would go unhandled.")]
    BoundedTail { name: String, upper: Amount },
}

/// An approver bound to the half-open band `[lower_bound, upper_bound)`.
/// `upper_bound == None` means the band has no ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct Handler {
    name: String,
    lower_bound: Amount,
    upper_bound: Option<Amount>,
}

impl Handler {
    pub fn new(name: impl Into<String>, lower_bound: Amount, upper_bound: Amount) -> Self {
        Handler {
            name: name.into(),
            lower_bound,
            upper_bound: Some(upper_bound),
        }
    }

    pub fn unbounded(name: impl Into<String>, lower_bound: Amount) -> Self {
        Handler {
            name: name.into(),
            lower_bound,
            upper_bound: None,
        }
    }

    pub fn with_bounds(
        name: impl Into<String>,
        lower_bound: Amount,
        upper_bound: Option<Amount>,
    ) -> Self {
        Handler {
            name: name.into(),
            lower_bound,
            upper_bound,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower_bound(&self) -> Amount {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> Option<Amount> {
        self.upper_bound
    }

    /// Inclusive low, exclusive high. NaN never matches.
    pub fn claims(&self, amount: Amount) -> bool {
        if amount < self.lower_bound || amount.is_nan() {
            return false;
        }

        match self.upper_bound {
            Some(upper) => amount < upper,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalResult {
    Approved { handler_name: String },
    Unhandled,
}

impl ApprovalResult {
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalResult::Approved { .. })
    }

    pub fn handler_name(&self) -> Option<&str> {
        match self {
            ApprovalResult::Approved { handler_name } => Some(handler_name),
            ApprovalResult::Unhandled => None,
        }
    }
}

/// Which handlers one evaluation looked at, in chain order, and what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationTrace {
    pub consulted: Vec<String>,
    pub result: ApprovalResult,
}

/// Ordered table of handlers. The successor of `handlers[i]` is `handlers[i + 1]`.
#[derive(Debug, Clone)]
pub struct EscalationPipeline {
    handlers: Vec<Handler>,
}

impl EscalationPipeline {
    /// Links the handlers in the given order. Only an empty sequence is rejected;
    /// a chain with gaps builds fine and yields `Unhandled` for amounts in the gap.
    pub fn build(handlers: Vec<Handler>) -> Result<Self, ConfigurationError> {
        if handlers.is_empty() {
            return Err(ConfigurationError::EmptyChain);
        }

        debug!(handlers = handlers.len(), "Built escalation pipeline");
        Ok(EscalationPipeline { handlers })
    }

    /// Same as `build`, but refuses any chain that could leave a non-negative amount unhandled.
    pub fn build_strict(handlers: Vec<Handler>) -> Result<Self, ConfigurationError> {
        validate_chain(&handlers)?;
        Self::build(handlers)
    }

    pub fn evaluate(&self, request: &TransactionRequest) -> ApprovalResult {
        self.evaluate_traced(request).result
    }

    /// Walks the chain front to back and stops at the first handler whose band
    /// holds `request.amount`. Earlier handlers win when bands overlap.
    pub fn evaluate_traced(&self, request: &TransactionRequest) -> EvaluationTrace {
        let mut consulted = Vec::new();

        for handler in &self.handlers {
            consulted.push(handler.name.clone());

            if handler.claims(request.amount) {
                debug!(
                    handler = %handler.name,
                    request_id = %request.id,
                    amount = request.amount,
                    "Handler approved transaction"
                );
                return EvaluationTrace {
                    consulted,
                    result: ApprovalResult::Approved {
                        handler_name: handler.name.clone(),
                    },
                };
            }

            debug!(
                handler = %handler.name,
                request_id = %request.id,
                amount = request.amount,
                "Handler cannot approve, escalating"
            );
        }

        warn!(
            request_id = %request.id,
            amount = request.amount,
            "No handler in the chain covers this amount"
        );
        EvaluationTrace {
            consulted,
            result: ApprovalResult::Unhandled,
        }
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    // build() never produces an empty pipeline
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn first(&self) -> &Handler {
        &self.handlers[0]
    }

    pub fn next_after(&self, index: usize) -> Option<&Handler> {
        index.checked_add(1).and_then(|next| self.handlers.get(next))
    }
}

/// Checks that the bands start at 0, are finite and non-empty, meet end to end
/// without gaps or overlaps, and that only the last one is unbounded.
pub fn validate_chain(handlers: &[Handler]) -> Result<(), ConfigurationError> {
    let (first, last) = match (handlers.first(), handlers.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ConfigurationError::EmptyChain),
    };

    for handler in handlers {
        let upper_ok = match handler.upper_bound {
            Some(upper) => upper.is_finite() && upper > handler.lower_bound,
            None => true,
        };
        if !handler.lower_bound.is_finite() || !upper_ok {
            return Err(ConfigurationError::InvalidBand {
                name: handler.name.clone(),
                lower: handler.lower_bound,
                upper: handler.upper_bound,
            });
        }
    }

    if first.lower_bound != 0.0 {
        return Err(ConfigurationError::NonZeroStart {
            name: first.name.clone(),
            lower: first.lower_bound,
        });
    }

    for pair in handlers.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let upper = match current.upper_bound {
            Some(upper) => upper,
            None => {
                return Err(ConfigurationError::UnboundedBeforeEnd {
                    name: current.name.clone(),
                })
            }
        };

        if upper < next.lower_bound {
            return Err(ConfigurationError::Gap {
                after: current.name.clone(),
                before: next.name.clone(),
                from: upper,
                to: next.lower_bound,
            });
        }
        if upper > next.lower_bound {
            return Err(ConfigurationError::Overlap {
                first: current.name.clone(),
                second: next.name.clone(),
            });
        }
    }

    if let Some(upper) = last.upper_bound {
        return Err(ConfigurationError::BoundedTail {
            name: last.name.clone(),
            upper,
        });
    }

    Ok(())
}
