//! A mountable routing scope: a path prefix plus the routes registered under it.

use axum::{Router, routing::MethodRouter};

/// Routes registered under a common prefix, mounted onto an application
/// router once registration is done.
#[derive(Debug, Default)]
pub struct RouterGroup {
    prefix: String,
    router: Router,
}

impl RouterGroup {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: normalize_prefix(prefix),
            router: Router::new(),
        }
    }

    /// Normalised prefix: empty for the root, otherwise `/segment[/segment..]`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Add `method_router` at `path`, relative to the group prefix.
    pub fn route(&mut self, path: &str, method_router: MethodRouter) {
        let path = normalize_path(path);
        self.router = std::mem::take(&mut self.router).route(&path, method_router);
    }

    /// Attach the group to `app` under its prefix.
    pub fn mount(self, app: Router) -> Router {
        if self.prefix.is_empty() {
            app.merge(self.router)
        } else {
            app.nest(&self.prefix, self.router)
        }
    }
}

/// `"admin/"`, `"/admin"` and `" /admin/ "` all become `"/admin"`; the root
/// becomes `""`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_normalized() {
        assert_eq!(normalize_prefix("admin"), "/admin");
        assert_eq!(normalize_prefix("/admin/"), "/admin");
        assert_eq!(normalize_prefix(" /admin/static/ "), "/admin/static");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }

    #[test]
    fn paths_gain_a_leading_slash() {
        assert_eq!(normalize_path("users"), "/users");
        assert_eq!(normalize_path("/users/:id"), "/users/:id");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn group_keeps_its_prefix() {
        assert_eq!(RouterGroup::new("/panel/").prefix(), "/panel");
    }
}
