//! Command handlers.
//!
//! Each handler translates parsed arguments into core calls and renders the
//! result. No business logic lives here.

pub mod generate;
