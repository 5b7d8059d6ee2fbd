use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid requested amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("invalid installment count: {count}")]
    InvalidInstallmentCount { count: u32 },

    #[error("{bound} bound broken at {count} installments: limit {limit}, computed {actual}")]
    BoundViolation {
        bound: String,
        count: u32,
        limit: f64,
        actual: f64,
    },

    #[error("rate solver failed to converge: {message}")]
    ConvergenceFailure { message: String },

    #[error("unsupported configuration: {message}")]
    UnsupportedConfiguration { message: String },

    #[error("invalid date: {message}")]
    InvalidDate { message: String },
}

pub type Result<T> = std::result::Result<T, PlanError>;
