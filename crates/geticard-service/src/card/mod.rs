//! Card creation, lookup, and editing.

pub mod service;

pub use service::{CardCreation, CardService};
