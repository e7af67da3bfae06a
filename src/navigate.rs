//! Pure route application (string-only, no filesystem). Walks a path up and
//! down the way a shell `cd` through a [`Route`] would.

use crate::error::{RouteError, RouteResult};
use crate::route::Route;

/// Applies `route` to `from`: climbs `route.ascend` levels, then enters each
/// `route.descend` segment in order.
///
/// Each climb removes one trailing segment including an empty one left by a
/// trailing separator, matching how ascend counts are produced. A route with
/// nothing to descend yields the ancestor without its trailing separator,
/// except for a bare root such as `/`.
///
/// # Examples
///
/// - `apply_route("/a/b/c", (1, ["d", "e"]), '/')` → `"/a/b/d/e"`
/// - `apply_route("/x/y", (2, ["p", "q"]), '/')` → `"/p/q"`
/// - `apply_route("/a/b", (0, ["c"]), '/')` → `"/a/b/c"`
/// - `apply_route("/a/b/c", (1, []), '/')` → `"/a/b"`
pub fn apply_route(from: &str, route: &Route, separator: char) -> RouteResult<String> {
    let base = ascend(from, route.ascend, separator)?;
    if route.descend.is_empty() {
        if route.ascend > 0 && base.len() > separator.len_utf8() {
            return Ok(base.strip_suffix(separator).unwrap_or(base).to_string());
        }
        return Ok(base.to_string());
    }

    let sep = separator.to_string();
    let tail = route.descend.join(&sep);
    let mut out = String::with_capacity(base.len() + 1 + tail.len());
    out.push_str(base);
    if !base.is_empty() && !base.ends_with(separator) {
        out.push(separator);
    }
    out.push_str(&tail);
    Ok(out)
}

/// The prefix of `path` left after climbing `levels` segments. Keeps the
/// separator that closed the last remaining directory.
fn ascend(path: &str, levels: usize, separator: char) -> RouteResult<&str> {
    if levels == 0 {
        return Ok(path);
    }

    let mut end = path.len();
    for climbed in 1..=levels {
        match path[..end].rfind(separator) {
            Some(pos) if climbed == levels => return Ok(&path[..pos + separator.len_utf8()]),
            Some(pos) => end = pos,
            // The first segment has no separator in front; climbing it leaves nothing.
            None if climbed == levels && !path.is_empty() => return Ok(""),
            None => break,
        }
    }

    Err(RouteError::AscendPastRoot {
        path: path.to_string(),
        levels,
    })
}
