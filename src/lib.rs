pub mod api;
pub mod app;
pub mod charts;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod render;
pub mod source;
