use std::collections::BTreeMap;
use lazy_static::lazy_static;

pub const ENV_FILE_NAME: &str = ".env";
pub const BACKEND_ADDRESS_VAR: &str = "BACKEND_ADDRESS";
pub const API_PREFIX: &str = "/api"; // dev-server route forwarded to the backend
pub const TARGET_SCHEME: &str = "http://";
pub const REWRITE_PATTERN: &str = "^/api";
pub const REWRITE_REPLACEMENT: &str = "/";

lazy_static! {
    pub static ref DEFAULT_PATH_REWRITE: BTreeMap<String, String> = {
        let mut m = BTreeMap::new();
        m.insert(REWRITE_PATTERN.to_string(), REWRITE_REPLACEMENT.to_string());
        m
    };
}
