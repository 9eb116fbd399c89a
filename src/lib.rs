pub mod analysis;
pub mod api;
pub mod config;
pub mod data;
pub mod logging;
pub mod model;
