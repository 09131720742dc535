// Library for tests to access modules

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod routes;
pub mod version;
pub mod window;
