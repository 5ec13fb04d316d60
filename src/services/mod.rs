// src/services/mod.rs
pub mod calculations;
pub mod form;
pub mod page;
