use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error("unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("expression nested too deeply")]
    TooDeep,
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("function '{name}' expects {expected} argument(s), got {got}")]
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
    },
}
