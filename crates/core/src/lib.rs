#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::Clock;
