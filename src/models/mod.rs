pub use experience::*;
pub use field::*;

pub mod registry;

mod experience;
mod field;
