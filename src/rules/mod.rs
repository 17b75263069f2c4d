use std::collections::BTreeMap;

use http::Uri;
use serde::{Deserialize, Serialize};

use crate::config::{API_PREFIX, BACKEND_ADDRESS_VAR, DEFAULT_PATH_REWRITE, TARGET_SCHEME};
use crate::env::EnvSnapshot;
use crate::errors::ConfigError;


/// One forwarding rule: requests matching the route prefix go to `target`
/// with the path rewritten first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    pub target: String,
    pub path_rewrite: BTreeMap<String, String>,
}

impl ProxyRule {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            path_rewrite: DEFAULT_PATH_REWRITE.clone(),
        }
    }

    /// Applies the rewrite table to a request path.
    ///
    /// Patterns starting with `^` match a literal prefix, as in the
    /// dev-server tooling this configuration feeds; other patterns replace
    /// their first occurrence. A doubled slash where the replacement meets
    /// the remainder is collapsed. Paths matching no pattern pass through.
    pub fn rewrite_path(&self, path: &str) -> String {
        for (pattern, replacement) in &self.path_rewrite {
            if let Some(prefix) = pattern.strip_prefix('^') {
                if let Some(rest) = path.strip_prefix(prefix) {
                    return join_rewritten(replacement, rest);
                }
            } else if let Some(at) = path.find(pattern.as_str()) {
                let rest = &path[at + pattern.len()..];
                return format!("{}{}{}", &path[..at], replacement, rest);
            }
        }
        path.to_string()
    }

    /// The target as a typed URI. The builder never validates the target
    /// itself; this is for consumers that want to parse it once.
    pub fn target_uri(&self) -> Result<Uri, ConfigError> {
        self.target
            .parse()
            .map_err(|e: http::uri::InvalidUri| ConfigError::InvalidTarget(e.to_string()))
    }
}

fn join_rewritten(replacement: &str, rest: &str) -> String {
    if replacement.ends_with('/') && rest.starts_with('/') {
        format!("{}{}", replacement, &rest[1..])
    } else {
        format!("{}{}", replacement, rest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServer {
    pub proxy: BTreeMap<String, ProxyRule>,
}

/// The subtree the external dev-server tooling reads:
/// `devServer.proxy["/api"] = { target, pathRewrite }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    pub dev_server: DevServer,
}

impl DevServerConfig {
    /// Builds the configuration from an environment snapshot: exactly one
    /// rule under `/api`, targeting `http://` + `BACKEND_ADDRESS`.
    ///
    /// A missing `BACKEND_ADDRESS` fails here rather than producing a
    /// target that only breaks once the dev server forwards a request.
    pub fn from_snapshot(snapshot: &EnvSnapshot) -> Result<Self, ConfigError> {
        let address = snapshot.require(BACKEND_ADDRESS_VAR)?;
        let rule = ProxyRule::new(format!("{}{}", TARGET_SCHEME, address));

        let mut proxy = BTreeMap::new();
        proxy.insert(API_PREFIX.to_string(), rule);

        Ok(Self {
            dev_server: DevServer { proxy },
        })
    }

    pub fn api_rule(&self) -> Option<&ProxyRule> {
        self.dev_server.proxy.get(API_PREFIX)
    }
}
