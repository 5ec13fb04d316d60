// src/handlers/mod.rs
pub mod error;
pub mod metrics;
pub mod page;
