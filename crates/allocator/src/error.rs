use types::{Cash, Position};

/// Fatal allocation failures.
///
/// A run that merely cannot fill every slot is NOT an error; it produces a
/// roster with recorded deficits and a failed feasibility report. These
/// variants cover structural problems detected before any selection happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocationError {
    #[error("unknown strategy '{0}' (expected value, high_score, or balanced)")]
    InvalidStrategy(String),

    #[error("{position} has {available} candidates but the schema requires at least {required}")]
    InsufficientCandidates {
        position: Position,
        required: usize,
        available: usize,
    },

    #[error("minimum feasible squad costs {required} which exceeds the budget cap {cap}")]
    BudgetInfeasible { required: Cash, cap: Cash },

    #[error("invalid squad schema: {0}")]
    InvalidSchema(String),
}

pub type Result<T> = std::result::Result<T, AllocationError>;
