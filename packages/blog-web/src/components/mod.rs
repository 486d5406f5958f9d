//! Reusable UI components

mod categories;
mod footer;
mod header;
mod loading;
mod post_card;

pub use categories::*;
pub use footer::*;
pub use header::*;
pub use loading::*;
pub use post_card::*;
