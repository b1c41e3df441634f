mod compiler;
mod constants;
mod query;
mod rendering;

pub use compiler::{Compiler, Query};
pub use constants::ROW_LIMIT;
