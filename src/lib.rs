//! # NullTrace node routes
//!
//! Computes the relative route between two paths held as plain strings: how
//! many levels to climb from the current directory and which child
//! directories to enter to reach the destination. No filesystem access.
//!
//! ## Features
//! - Directory-aligned common prefix (`/abc` and `/abd` share only `/`)
//! - Configurable ASCII separator, `/` by default
//! - Optional scan offset to skip a prefix already known to be shared
//! - Route application for walking a path through a computed route
//!
//! ## Example
//! ```
//! use nulltrace_route::compute_route;
//!
//! let route = compute_route("/a/b/c", "/a/b/d/e");
//! assert_eq!(route.ascend, 1);
//! assert_eq!(route.descend, vec!["d", "e"]);
//! assert_eq!(route.to_string(), "../d/e");
//! ```
//!
//! ## Example: Windows-style separator with a known shared prefix
//! ```
//! use nulltrace_route::{RouteConfig, RouteResolver};
//!
//! let resolver = RouteResolver::new(RouteConfig::new().with_separator('\\')).unwrap();
//! let base = r"C:\users\haru";
//! let from = r"C:\users\haru\Documents\WindowsPowerShell";
//! let dest = r"C:\users\haru\appdata\local\temp";
//!
//! let route = resolver.compute_route(from, dest, base.len()).unwrap();
//! assert_eq!(route.ascend, 2);
//! assert_eq!(resolver.apply(from, &route).unwrap(), dest);
//! ```

pub mod config;
pub mod error;
pub mod navigate;
pub mod resolver;
pub mod route;

pub use config::{OffsetPolicy, RouteConfig};
pub use error::{RouteError, RouteResult};
pub use navigate::apply_route;
pub use resolver::RouteResolver;
pub use route::Route;

/// Route from `from` to `dest` using `/` as the separator
pub fn compute_route(from: &str, dest: &str) -> Route {
    RouteResolver::default().route(from, dest)
}

/// Route from `from` to `dest` with `/` as the separator, skipping the first
/// `offset` bytes known to be shared. Offsets past the shorter path are clamped.
pub fn compute_route_from(from: &str, dest: &str, offset: usize) -> Route {
    RouteResolver::default().route_clamped(from, dest, offset)
}
