pub mod expression;
pub mod ordering;
pub mod registry;
pub mod traversal;

pub use expression::{Constant, Expr};
pub use registry::{constant_for_name, function_arity, is_function_name, is_reserved_name};
pub use traversal::free_vars;
