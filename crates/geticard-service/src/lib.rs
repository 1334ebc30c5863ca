//! # geticard-service
//!
//! Business logic service layer for GetiCard. Each service orchestrates
//! repositories, image storage, and authentication to implement one group
//! of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod card;
pub mod user;

pub use card::{CardCreation, CardService};
pub use user::{LoginOutcome, UserService};
