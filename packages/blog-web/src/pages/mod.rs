//! Page components

mod category;

pub use category::*;
