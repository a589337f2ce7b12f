//! Request handling.

pub mod handler;

pub use handler::StatsHandler;
