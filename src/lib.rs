pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod telemetry;
pub mod validation;
