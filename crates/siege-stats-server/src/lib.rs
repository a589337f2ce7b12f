//! siege-stats server — serves the reshaped Rainbow Six Siege stats over HTTP.

pub mod config;
pub mod protocol;
pub mod transport;
pub mod types;

pub use config::ServerConfig;
pub use protocol::StatsHandler;
pub use transport::HttpTransport;
