pub mod analytics;
pub mod data;
pub mod error;
pub mod model;
pub mod output;
pub mod routes;
pub mod store;
