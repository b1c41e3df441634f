mod aggregation;
mod chart;
mod field;
mod row;

pub use aggregation::*;
pub use chart::*;
pub use field::*;
pub use row::*;
