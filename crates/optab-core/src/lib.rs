//! End-to-end pipeline and session state.
//!
//! A [`Session`] owns the table between discrete user operations (upload,
//! edit one flag, delete one row, aggregate) and the single delivery payload
//! slot. Operations are serialized by the caller; nothing here is shared
//! across threads.

pub mod session;

pub use session::{Delivery, Session};
