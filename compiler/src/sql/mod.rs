mod dialect;
mod mysql;
mod postgres;

pub mod expr;
pub mod tree;

pub use dialect::*;
pub use mysql::*;
pub use postgres::*;
