pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod state;
pub mod summary;
