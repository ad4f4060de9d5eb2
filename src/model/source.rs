use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::{from_str, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// One repository whose issues are aggregated into the report.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Source {
    pub owner: String,
    pub name: String,
}

// Create
impl Source {
    pub fn from_config(path: &Path) -> Result<Vec<Self>> {
        let invalid = |reason: String| Error::InvalidSourcesFile {
            path: path.display().to_string(),
            reason,
        };
        let json_str = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        Self::parse(&json_str).map_err(invalid)
    }

    /// Parses `owner/name`.
    pub fn from_slug(slug: &str) -> Result<Self> {
        let Some((owner, name)) = slug.trim().split_once('/') else {
            return Err(Error::InvalidSource(slug.to_string()));
        };
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(Error::InvalidSource(slug.to_string()));
        }
        Ok(Self::new(owner, name))
    }

    pub fn new(owner: impl ToString, name: impl ToString) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }
}

// Parser
impl Source {
    fn parse(json_str: &str) -> std::result::Result<Vec<Self>, String> {
        let elements: IndexMap<String, Value> = from_str(json_str).map_err(|e| e.to_string())?;
        let mut result = Vec::new();
        for (name, details) in elements {
            let Some(owner) = details["owner"].as_str() else {
                return Err(format!("Not found 'owner' field for '{name}'"));
            };
            result.push(Self::new(owner, name));
        }
        if result.is_empty() {
            return Err("no sources listed".to_string());
        }
        Ok(result)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
