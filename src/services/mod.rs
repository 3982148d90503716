// src/services/mod.rs
pub mod calculations;
pub mod render;
pub mod report;
pub mod scrape;
