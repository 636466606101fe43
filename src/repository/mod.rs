// src/repository/mod.rs

//! Store access. Every function takes an explicit connection handle; callers
//! acquire it per request and it is released when dropped.

pub mod commands;
pub mod reads;
