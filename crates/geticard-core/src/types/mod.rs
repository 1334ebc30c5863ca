//! Core type definitions used across the GetiCard workspace.

pub mod record;

pub use record::{Item, ScanFilter, TableDef};
