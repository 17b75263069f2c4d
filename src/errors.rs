use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(String),
    Io(String),
    Parse(String),
    InvalidTarget(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingVar(name) => write!(f, "Missing environment variable: {}", name),
            Self::Io(e) => write!(f, "Failed to read environment file: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse environment file: {}", e),
            Self::InvalidTarget(e) => write!(f, "Invalid proxy target: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
