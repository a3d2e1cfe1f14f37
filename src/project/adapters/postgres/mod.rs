//! `PostgreSQL` adapters for the project catalogue.

mod models;
mod repository;
mod schema;

pub use repository::PostgresProjectRepository;
