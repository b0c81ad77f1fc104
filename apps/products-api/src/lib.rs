//! Products API - REST server for creating and listing products

pub mod api;
pub mod app;
pub mod config;
pub mod openapi;
