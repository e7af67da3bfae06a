//! Route resolution between two separator-delimited path strings.
//!
//! The shared prefix is always rounded down to the last complete directory
//! segment: `/abc` and `/abd` share only `/`, even though `ab` matches.

use tracing::trace;

use crate::config::{OffsetPolicy, RouteConfig};
use crate::error::{RouteError, RouteResult};
use crate::navigate::apply_route;
use crate::route::Route;

/// Where the two paths stop sharing directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommonPrefix {
    /// The paths disagree after `boundary`, the index just past the last
    /// shared separator. Both unshared suffixes start there.
    Diverged { boundary: usize },
    /// The shorter path is a whole-segment prefix of the longer one. The
    /// longer suffix starts past the separator at `shared`.
    Exhausted { shared: usize },
}

impl CommonPrefix {
    /// Index at which the unshared suffix of a path of length `len` starts.
    /// Returns `len` when nothing is left.
    fn suffix_start(self, len: usize) -> usize {
        match self {
            CommonPrefix::Diverged { boundary } => boundary,
            CommonPrefix::Exhausted { shared } if len > shared => shared + 1,
            CommonPrefix::Exhausted { .. } => len,
        }
    }
}

/// Computes [`Route`]s with a fixed separator and offset policy.
///
/// Stateless between calls, so a single resolver can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteResolver {
    config: RouteConfig,
}

impl RouteResolver {
    pub fn new(config: RouteConfig) -> RouteResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Resolver using the host platform's path separator
    pub fn platform() -> Self {
        Self {
            config: RouteConfig::platform(),
        }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn separator(&self) -> char {
        self.config.separator
    }

    /// Route from `from` to `dest`, scanning from the start of both paths.
    pub fn route(&self, from: &str, dest: &str) -> Route {
        self.route_clamped(from, dest, 0)
    }

    /// Route from `from` to `dest`, skipping the first `offset` bytes.
    ///
    /// The caller asserts that `from[..offset] == dest[..offset]`. An offset
    /// past the shorter path is clamped or rejected depending on the
    /// configured [`OffsetPolicy`].
    pub fn compute_route(&self, from: &str, dest: &str, offset: usize) -> RouteResult<Route> {
        let offset = self.effective_offset(from, dest, offset)?;
        Ok(self.route_clamped(from, dest, offset))
    }

    /// Like [`compute_route`](Self::compute_route) but always clamps the offset.
    pub(crate) fn route_clamped(&self, from: &str, dest: &str, offset: usize) -> Route {
        let offset = offset.min(from.len()).min(dest.len());
        let prefix = self.common_prefix(from.as_bytes(), dest.as_bytes(), offset);
        self.build(from, dest, prefix, offset)
    }

    /// Routes in both directions, `a -> b` and `b -> a`, from a single scan.
    pub fn compute_both(&self, a: &str, b: &str, offset: usize) -> RouteResult<(Route, Route)> {
        let offset = self.effective_offset(a, b, offset)?;
        let prefix = self.common_prefix(a.as_bytes(), b.as_bytes(), offset);
        Ok((
            self.build(a, b, prefix, offset),
            self.build(b, a, prefix, offset),
        ))
    }

    /// Follow `route` from `from` using this resolver's separator
    pub fn apply(&self, from: &str, route: &Route) -> RouteResult<String> {
        apply_route(from, route, self.config.separator)
    }

    fn effective_offset(&self, from: &str, dest: &str, offset: usize) -> RouteResult<usize> {
        let max = from.len().min(dest.len());
        if offset <= max {
            return Ok(offset);
        }
        match self.config.offset_policy {
            OffsetPolicy::Clamp => Ok(max),
            OffsetPolicy::Strict => Err(RouteError::OffsetOutOfRange { offset, max }),
        }
    }

    /// `offset` must already be within both paths.
    fn common_prefix(&self, from: &[u8], dest: &[u8], offset: usize) -> CommonPrefix {
        let sep = self.config.separator_byte();
        let max = from.len().min(dest.len());

        // The skipped prefix is shared, so its last separator is the starting boundary.
        let mut boundary = from[..offset]
            .iter()
            .rposition(|&b| b == sep)
            .map_or(0, |pos| pos + 1);

        let mut i = offset;
        while i < max && from[i] == dest[i] {
            if from[i] == sep {
                boundary = i + 1;
            }
            i += 1;
        }

        if i < max {
            return CommonPrefix::Diverged { boundary };
        }

        let longer = if from.len() > max { from } else { dest };
        match longer.get(max) {
            None => CommonPrefix::Exhausted { shared: max },
            Some(&b) if b == sep => CommonPrefix::Exhausted { shared: max },
            // `/a/b` vs `/a/bc`: the last segment only partially matches.
            Some(_) => CommonPrefix::Diverged { boundary },
        }
    }

    fn build(&self, from: &str, dest: &str, prefix: CommonPrefix, offset: usize) -> Route {
        let ascend = ascend_count(from, prefix.suffix_start(from.len()), self.config.separator);
        let descend =
            descend_segments(dest, prefix.suffix_start(dest.len()), self.config.separator);

        trace!(
            from_len = from.len(),
            dest_len = dest.len(),
            offset,
            ascend,
            descend = descend.len(),
            "computed route"
        );

        Route { ascend, descend }
    }
}

/// Separators in the suffix plus one for the trailing segment, even when it is empty.
fn ascend_count(path: &str, start: usize, separator: char) -> usize {
    // `get` also guards against a misused offset landing inside a UTF-8 sequence.
    match path.get(start..) {
        Some(suffix) if !suffix.is_empty() => suffix.matches(separator).count() + 1,
        _ => 0,
    }
}

fn descend_segments(path: &str, start: usize, separator: char) -> Vec<String> {
    match path.get(start..) {
        Some(suffix) if !suffix.is_empty() => suffix.split(separator).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn route(from: &str, dest: &str) -> (usize, Vec<String>) {
        RouteResolver::default().route(from, dest).into_parts()
    }

    fn segs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identity() {
        for p in ["/", "/a", "/a/b/c", "/users/haru/Documents"] {
            assert_eq!(route(p, p), (0, vec![]), "identity for {}", p);
        }
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(route("", ""), (0, vec![]));
    }

    #[test]
    fn test_no_partial_segment_match() {
        assert_eq!(route("/abc", "/abd"), (1, segs(&["abd"])));
    }

    #[test]
    fn test_common_prefix_pruning() {
        assert_eq!(route("/a/b/c", "/a/b/d/e"), (1, segs(&["d", "e"])));
    }

    #[test]
    fn test_disjoint_paths() {
        assert_eq!(route("/x/y", "/p/q"), (2, segs(&["p", "q"])));
    }

    #[test]
    fn test_prefix_relationship() {
        assert_eq!(route("/a/b", "/a/b/c"), (0, segs(&["c"])));
        assert_eq!(route("/a/b/c", "/a/b"), (1, vec![]));
        assert_eq!(route("/a", "/a/b/c/d"), (0, segs(&["b", "c", "d"])));
    }

    #[test]
    fn test_partial_trailing_segment() {
        assert_eq!(route("/a/b", "/a/bc"), (1, segs(&["bc"])));
        assert_eq!(route("/a/bc", "/a/b"), (1, segs(&["b"])));
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(route("/a/b/", "/a/b/c"), (0, segs(&["c"])));
        assert_eq!(route("/a/b", "/a/b/"), (0, vec![]));
    }

    #[test]
    fn test_relative_strings_without_leading_separator() {
        assert_eq!(route("abc", "abd"), (1, segs(&["abd"])));
        assert_eq!(route("", "a/b"), (0, segs(&["a", "b"])));
        assert_eq!(route("a/b", ""), (2, vec![]));
    }

    #[test]
    fn test_root_and_empty() {
        assert_eq!(route("", "/"), (0, vec![]));
        assert_eq!(route("/", "/a"), (0, segs(&["a"])));
        assert_eq!(route("/a", "/"), (1, vec![]));
    }

    #[test]
    fn test_offset_inside_common_region_matches_full_scan() {
        let resolver = RouteResolver::default();
        let from = "/users/haru/Documents/scripts";
        let dest = "/users/haru/appdata/local/temp";
        let expected = resolver.route(from, dest);
        for offset in 0..="/users/haru/".len() {
            assert_eq!(
                resolver.compute_route(from, dest, offset).unwrap(),
                expected,
                "offset {}",
                offset
            );
        }
    }

    #[test]
    fn test_offset_clamped_past_shorter_path() {
        let resolver = RouteResolver::default();
        let result = resolver.compute_route("/a/b", "/a/b/c", 100).unwrap();
        assert_eq!(result.into_parts(), (0, segs(&["c"])));
    }

    #[test]
    fn test_offset_rejected_under_strict_policy() {
        let config = RouteConfig::default().with_offset_policy(OffsetPolicy::Strict);
        let resolver = RouteResolver::new(config).unwrap();
        assert_eq!(
            resolver.compute_route("/a/b", "/a/b/c", 5),
            Err(RouteError::OffsetOutOfRange { offset: 5, max: 4 })
        );
        assert!(resolver.compute_route("/a/b", "/a/b/c", 4).is_ok());
    }

    #[test]
    fn test_backslash_separator() {
        let resolver = RouteResolver::new(RouteConfig::default().with_separator('\\')).unwrap();
        let base = r"C:\users\haru";
        let from = r"C:\users\haru\Documents\WindowsPowerShell";
        let dest = r"C:\users\haru\appdata\local\temp\MyTempApp\logs";

        assert_eq!(
            resolver.route(from, dest).into_parts(),
            (2, segs(&["appdata", "local", "temp", "MyTempApp", "logs"]))
        );
        assert_eq!(
            resolver.route(dest, from).into_parts(),
            (5, segs(&["Documents", "WindowsPowerShell"]))
        );
        assert_eq!(
            resolver.route(base, from).into_parts(),
            (0, segs(&["Documents", "WindowsPowerShell"]))
        );
        assert_eq!(resolver.route(from, base).into_parts(), (2, vec![]));
        assert_eq!(
            resolver.compute_route(from, dest, base.len()).unwrap(),
            resolver.route(from, dest)
        );
    }

    #[test]
    fn test_forward_slash_is_plain_text_under_backslash_separator() {
        let resolver = RouteResolver::new(RouteConfig::default().with_separator('\\')).unwrap();
        assert_eq!(resolver.route("/a/b", "/a/c").into_parts(), (1, segs(&["/a/c"])));
    }

    #[test]
    fn test_compute_both_matches_single_direction() {
        let resolver = RouteResolver::default();
        let (forward, backward) = resolver.compute_both("/a/b/c", "/a/d", 0).unwrap();
        assert_eq!(forward, resolver.route("/a/b/c", "/a/d"));
        assert_eq!(backward, resolver.route("/a/d", "/a/b/c"));
    }

    #[test]
    fn test_structural_symmetry() {
        let resolver = RouteResolver::default();
        let pairs = [
            ("/a/b/c", "/a/b/d/e"),
            ("/x/y", "/p/q"),
            ("/a/b", "/a/b/c"),
            ("/abc", "/abd"),
            ("/a/b", "/a/bc"),
        ];
        for (a, b) in pairs {
            let (ab, ba) = resolver.compute_both(a, b, 0).unwrap();
            assert_eq!(ab.ascend, ba.descend.len(), "{} -> {}", a, b);
            assert_eq!(ba.ascend, ab.descend.len(), "{} -> {}", b, a);
        }
    }

    #[test]
    fn test_non_ascii_segments() {
        assert_eq!(route("/données/été", "/données/hiver"), (1, segs(&["hiver"])));
        assert_eq!(route("/日本/東京", "/日本/大阪"), (1, segs(&["大阪"])));
    }

    #[test]
    fn test_misused_offset_does_not_panic() {
        let resolver = RouteResolver::default();
        let route = resolver.compute_route("/ab", "éé", 2).unwrap();
        assert_eq!(route.ascend, 1);
    }

    #[test]
    fn test_new_rejects_non_ascii_separator() {
        let result = RouteResolver::new(RouteConfig::default().with_separator('→'));
        assert_eq!(result, Err(RouteError::InvalidSeparator { separator: '→' }));
    }
}
