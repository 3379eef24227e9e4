//! Concrete game implementations.

pub mod twenty_one;

pub use twenty_one::{TwentyOne, TwentyOneBuilder};
