// src/services/mod.rs

pub mod aggregate;
pub mod scoring;
