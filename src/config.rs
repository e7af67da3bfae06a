use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{RouteError, RouteResult};

/// Environment variable overriding the separator character
pub const SEPARATOR_ENV: &str = "NODE_ROUTE_SEPARATOR";
/// Environment variable overriding the offset policy (`clamp` or `strict`)
pub const OFFSET_POLICY_ENV: &str = "NODE_ROUTE_OFFSET_POLICY";

pub const DEFAULT_SEPARATOR: char = '/';

/// What to do with a scan offset past the shorter path's length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetPolicy {
    /// Clamp the offset to the comparable length and carry on
    #[default]
    Clamp,
    /// Reject the offset with [`RouteError::OffsetOutOfRange`]
    Strict,
}

impl FromStr for OffsetPolicy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(OffsetPolicy::Clamp),
            "strict" => Ok(OffsetPolicy::Strict),
            _ => Err(RouteError::InvalidOffsetPolicy {
                value: s.to_string(),
            }),
        }
    }
}

/// Resolver configuration.
///
/// ```yaml
/// separator: "\\"
/// offsetPolicy: strict
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteConfig {
    pub separator: char,
    pub offset_policy: OffsetPolicy,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            offset_policy: OffsetPolicy::Clamp,
        }
    }
}

impl RouteConfig {
    /// Create a config with the default separator (`/`) and clamping offsets
    pub fn new() -> Self {
        Self::default()
    }

    /// Config using the separator of the platform this binary was built for
    pub fn platform() -> Self {
        Self::default().with_separator(std::path::MAIN_SEPARATOR)
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_offset_policy(mut self, policy: OffsetPolicy) -> Self {
        self.offset_policy = policy;
        self
    }

    /// Parse a YAML config document. Missing keys fall back to defaults.
    pub fn from_yaml_str(yaml: &str) -> RouteResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RouteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML config file
    pub fn load(path: impl AsRef<Path>) -> RouteResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply `NODE_ROUTE_SEPARATOR` and `NODE_ROUTE_OFFSET_POLICY` when set
    pub fn with_env_overrides(self) -> RouteResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> RouteResult<Self> {
        if let Some(raw) = lookup(SEPARATOR_ENV) {
            self.separator = parse_separator(&raw)?;
        }
        if let Some(raw) = lookup(OFFSET_POLICY_ENV) {
            self.offset_policy = raw.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    /// The separator must be ASCII so byte-wise scanning never splits a UTF-8 sequence
    pub fn validate(&self) -> RouteResult<()> {
        if !self.separator.is_ascii() {
            return Err(RouteError::InvalidSeparator {
                separator: self.separator,
            });
        }
        Ok(())
    }

    pub(crate) fn separator_byte(&self) -> u8 {
        // validate() guarantees ASCII; anything else is truncated and never matches a path byte.
        self.separator as u8
    }
}

/// Parse a separator from a CLI flag or environment value.
/// Accepts a single character; `\\` is taken as a single backslash.
pub fn parse_separator(raw: &str) -> RouteResult<char> {
    let raw = if raw == "\\\\" { "\\" } else { raw };
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        (Some(c), None) => Err(RouteError::InvalidSeparator { separator: c }),
        _ => Err(RouteError::InvalidArgument(format!(
            "separator must be exactly one character, got '{}'",
            raw
        ))),
    }
}
