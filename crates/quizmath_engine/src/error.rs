use thiserror::Error;

/// Why a numeric evaluation failed.
///
/// Never surfaced to the caller: a failed trial is skipped by the
/// oracle and a failed variable-free evaluation fails the comparison
/// closed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("domain error: {function}({arg})")]
    Domain { function: String, arg: f64 },
    #[error("variable '{0}' not found")]
    UnboundVariable(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("result is not finite")]
    NonFinite,
    #[error("cannot evaluate '{0}' over the reals")]
    NonNumeric(&'static str),
    #[error("expression nested too deeply")]
    DepthExceeded,
}
