//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Cache-Control: no-store (tower-http)
//! 2. Access logger

pub mod access;
