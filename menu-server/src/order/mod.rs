//! Order link construction
//!
//! Pure functions turning the current cart into a WhatsApp deep link:
//! no I/O, no state, trivially testable.
//!
//! - [`phone`] - contact number normalization
//! - [`builder`] - order summary, message and deep-link URL

pub mod builder;
pub mod phone;

pub use builder::{OrderLink, build_order, cart_total, order_summary};
pub use phone::normalize;
