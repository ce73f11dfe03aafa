//! Handler signatures the admin panel registers with an integrator.

use std::sync::Arc;

use crate::context::RequestContext;

/// Renders a page: returns the status and either the HTML body or, for a
/// redirect status, the redirect target.
pub type HandlerFunc = Arc<dyn Fn(&mut dyn RequestContext) -> (u16, String) + Send + Sync>;

/// Serves a JSON endpoint. The handler writes its own response through the
/// integrator; an `Err` becomes a 500 with an [`crate::ErrorResponse`] body.
pub type JsonHandlerFunc =
    Arc<dyn Fn(&mut dyn RequestContext) -> anyhow::Result<()> + Send + Sync>;

/// Status codes whose handler output is a redirect target, not a body.
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

pub fn is_redirect(status: u16) -> bool {
    REDIRECT_STATUS_CODES.contains(&status)
}

/// Wrap a closure as a [`HandlerFunc`].
pub fn handler<F>(f: F) -> HandlerFunc
where
    F: Fn(&mut dyn RequestContext) -> (u16, String) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`JsonHandlerFunc`].
pub fn json_handler<F>(f: F) -> JsonHandlerFunc
where
    F: Fn(&mut dyn RequestContext) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_codes_are_exactly_the_five_redirects() {
        for code in [301, 302, 303, 307, 308] {
            assert!(is_redirect(code), "{code} should redirect");
        }
        for code in [200, 204, 300, 304, 305, 306, 400, 404, 500] {
            assert!(!is_redirect(code), "{code} should not redirect");
        }
    }
}
