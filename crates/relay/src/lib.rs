pub mod di;
pub mod domain;
pub mod handler;
pub mod metrics;
pub mod middleware;
pub mod service;
pub mod state;
