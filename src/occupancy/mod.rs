pub mod aggregator;
pub mod config;
pub mod matrix;

pub use aggregator::accumulate_occupancy;
pub use config::OccupancyConfig;
pub use matrix::{DefaultCount, OccupancyCount, OccupancyMatrix};
