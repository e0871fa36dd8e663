//! HTTP handlers

pub mod health;
pub mod analysis;
pub mod page;
pub mod predict;
pub mod status;
