//! Core client module

pub mod client;
pub mod config;
pub mod entries;
pub mod errors;
pub mod models;
