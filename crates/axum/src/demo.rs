//! A small admin panel wired through the router-agnostic contract, used by
//! the `adminbridge-demo` binary.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use serde_json::json;
use tower::ServiceBuilder;

use adminbridge_core::{EmbeddedAssets, Integrator, Method, handler, json_handler};

use crate::{AxumIntegrator, RouterGroup};

const MODELS: [&str; 3] = ["users", "groups", "audit"];

const STYLESHEET: &str = "body { font-family: system-ui; margin: 2rem; }\n";
const SCRIPT: &str = "document.documentElement.dataset.panel = 'ready';\n";

/// Build the demo application with the panel mounted under `prefix`.
pub fn build_app(prefix: &str) -> Router {
    let mut integrator = AxumIntegrator::new(RouterGroup::new(prefix));
    let base = integrator.group().prefix().to_string();
    register_panel(&mut integrator, &base);

    integrator
        .into_group()
        .mount(Router::new())
        .layer(ServiceBuilder::new().layer(middleware::from_fn(log_requests)))
}

/// Register the demo pages the way an admin library would: only through
/// [`Integrator`]. `base` is the public path the panel is mounted at and is
/// used for links and redirects.
pub fn register_panel(integrator: &mut dyn Integrator, base: &str) {
    let dashboard = format!("{base}/dashboard");
    integrator.handle_route(
        Method::Get,
        "/",
        handler(move |_ctx| (302, dashboard.clone())),
    );

    let stylesheet = format!("{base}/static/admin.css");
    integrator.handle_route(
        Method::Get,
        "/dashboard",
        handler(move |ctx| {
            let name = ctx.query_param("name").unwrap_or_else(|| "admin".to_string());
            let body = format!(
                "<html><head><link rel=\"stylesheet\" href=\"{stylesheet}\"></head>\
                 <body><h1>Welcome, {}</h1></body></html>",
                escape_html(&name)
            );
            (200, body)
        }),
    );

    integrator.handle_route(
        Method::Get,
        "/models/:model",
        handler(|ctx| match ctx.path_param("model") {
            Some(model) if MODELS.contains(&model) => {
                (200, format!("<html><body><h1>{model}</h1></body></html>"))
            }
            _ => (404, "<html><body>Unknown model</body></html>".to_string()),
        }),
    );

    let after_save = format!("{base}/dashboard");
    integrator.handle_route(
        Method::Post,
        "/settings",
        handler(move |ctx| match ctx.form_data() {
            Ok(form) if form.contains_key("site_name") => (303, after_save.clone()),
            Ok(_) => (400, "<html><body>site_name is required</body></html>".to_string()),
            Err(err) => (
                400,
                format!("<html><body>{}</body></html>", escape_html(&err.to_string())),
            ),
        }),
    );

    integrator.handle_json_route(
        Method::Post,
        "/api/echo",
        json_handler(|ctx| {
            let body = ctx.json_body()?;
            ctx.set_json_response(200, json!({ "echo": body }));
            Ok(())
        }),
    );

    let assets = EmbeddedAssets::new()
        .with_asset("admin.css", STYLESHEET)
        .with_asset("admin.js", SCRIPT);
    integrator.serve_assets("/static", Arc::new(assets));
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(%method, path = %path, status = response.status().as_u16(), "request");
    response
}
