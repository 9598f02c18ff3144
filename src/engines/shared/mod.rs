// Shared utilities and models

pub mod error_model;
pub mod models;
