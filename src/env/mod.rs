use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::ENV_FILE_NAME;
use crate::errors::ConfigError;

#[cfg(test)]
mod tests;

/// Resolved key-value environment, read-only after loading.
///
/// Populated from the nearest `.env` file above a starting directory, the
/// way the front-end build located its configuration. File values never
/// shadow variables already present in the process environment; apply
/// [`EnvSnapshot::with_process_env`] to get that precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Walks from `start_dir` up through its ancestors and returns the
    /// nearest `.env` file, if any.
    pub fn find_file(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = Some(start_dir);
        while let Some(d) = dir {
            let candidate = d.join(ENV_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = d.parent();
        }
        None
    }

    /// Loads the nearest `.env` file above `start_dir`.
    ///
    /// No file anywhere in the ancestor chain is not an error: the snapshot
    /// is simply empty. Only an unreadable or malformed file fails.
    pub fn load(start_dir: &Path) -> Result<Self, ConfigError> {
        let path = match Self::find_file(start_dir) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        let mut vars = HashMap::new();
        let entries = dotenvy::from_path_iter(&path).map_err(env_file_error)?;
        for entry in entries {
            let (key, value) = entry.map_err(env_file_error)?;
            vars.insert(key, value);
        }

        Ok(Self { vars })
    }

    /// Overlays the process environment; variables set in the environment
    /// take precedence over file values, matching dotenv semantics.
    pub fn with_process_env(mut self) -> Self {
        for (key, value) in std::env::vars() {
            self.vars.insert(key, value);
        }
        self
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingVar(key.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

fn env_file_error(err: dotenvy::Error) -> ConfigError {
    match err {
        dotenvy::Error::Io(e) => ConfigError::Io(e.to_string()),
        other => ConfigError::Parse(other.to_string()),
    }
}
