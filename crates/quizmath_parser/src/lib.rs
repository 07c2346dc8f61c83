pub mod error;
pub mod normalize;
pub mod parser;

pub use error::ParseError;
pub use normalize::{normalize, DNE_SENTINEL};
pub use parser::parse;
