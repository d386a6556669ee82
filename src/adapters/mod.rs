//! Iterator adapters that have no direct counterpart in `std` or
//! `itertools` with an owned, chain-friendly shape.

mod cycle;
mod group_by;
mod transpose;
mod unpack;

pub(crate) use cycle::Cycle;
pub(crate) use group_by::GroupBy;
pub(crate) use transpose::{Transpose, TransposeLongest};
pub use unpack::Unpack;
