//! Chainable lazy sequences.
//!
//! [`LazySequence`] wraps any iterable and offers a fluent set of
//! transformations. Each one returns another `LazySequence`, so calls chain
//! indefinitely and nothing is evaluated until the sequence is iterated.
//!
//! ```
//! use chiter::wrap;
//!
//! let evens: Vec<_> = wrap(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4]);
//!
//! let joined: Vec<_> = (wrap(0..2) + vec![5, 6]).map(|x| x * 10).collect();
//! assert_eq!(joined, vec![0, 10, 50, 60]);
//! ```

mod adapters;
mod error;
mod hint;
mod seq;
mod tee;

pub use adapters::Unpack;
pub use error::{Result, SequenceError};
pub use hint::LengthHint;
pub use seq::{wrap, IntoLazySequence, LazySequence};
