// src/pipeline.rs
pub mod chain;
pub mod config;
pub mod document;
