pub mod cache;
pub mod config;
pub mod extract;
pub mod logging;
pub mod planning;
pub mod week;
