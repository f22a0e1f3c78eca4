// src/lib.rs

pub mod classifier;
pub mod client;
pub mod config;
pub mod gateway;
pub mod prompt;
pub mod relay;
pub mod streaming;
