#![forbid(unsafe_code)]

pub mod data;
pub mod error;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::Clock;
