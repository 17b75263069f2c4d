pub mod config;
pub mod env;
pub mod errors;
pub mod rules;


pub use env::EnvSnapshot;
pub use errors::ConfigError;
pub use rules::{DevServerConfig, ProxyRule};
