//! API endpoint handlers, one module per resource.

pub mod form;
pub mod health;
pub mod reports;
pub mod simulation;
pub mod tracker;
