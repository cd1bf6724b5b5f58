pub mod config;
pub mod exercises;
pub mod run;
pub mod stats;
pub mod welcome;

use gentlestep_core::Router;

/// Router backed by the on-disk preference database.
pub fn open_router() -> Result<Router, Box<dyn std::error::Error>> {
    Ok(Router::open()?)
}
