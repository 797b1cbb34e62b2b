pub mod api;
pub mod media;
pub mod metrics;
pub mod state;
