use serde::{Deserialize, Serialize};
use std::fmt;

/// A relative move between two paths: climb `ascend` levels, then enter
/// each of `descend` in order (shallowest first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub ascend: usize,
    pub descend: Vec<String>,
}

impl Route {
    pub fn new(ascend: usize, descend: Vec<String>) -> Self {
        Self { ascend, descend }
    }

    /// True when `from` and `dest` are the same location
    pub fn is_empty(&self) -> bool {
        self.ascend == 0 && self.descend.is_empty()
    }

    /// Total number of directory steps (ups plus downs)
    pub fn len(&self) -> usize {
        self.ascend + self.descend.len()
    }

    /// Render as a relative path such as `../../d/e`, or `.` for an empty route
    pub fn to_relative_path(&self, separator: char) -> String {
        if self.is_empty() {
            return ".".to_string();
        }
        let parts: Vec<&str> = std::iter::repeat("..")
            .take(self.ascend)
            .chain(self.descend.iter().map(String::as_str))
            .collect();
        parts.join(&separator.to_string())
    }

    /// Split into the raw `(ascend, descend)` pair
    pub fn into_parts(self) -> (usize, Vec<String>) {
        (self.ascend, self.descend)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_relative_path('/'))
    }
}

impl From<(usize, Vec<String>)> for Route {
    fn from((ascend, descend): (usize, Vec<String>)) -> Self {
        Self { ascend, descend }
    }
}
