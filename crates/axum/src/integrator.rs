//! `Integrator` implementation for axum.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{DefaultBodyLimit, Path},
    http::{HeaderMap, HeaderValue, Method as HttpMethod, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{MethodFilter, get, on},
};

use adminbridge_core::{
    ErrorResponse, FormData, HandlerFunc, IntegrationError, Integrator, JsonHandlerFunc,
    JsonObject, Method, RequestContext, TemplateRenderer, is_redirect,
};

use crate::{content_type::ContentTypes, context::AxumContext, group::RouterGroup};

/// Content type for pages rendered by HTML handlers.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Largest request body buffered for a handler (2 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Mounts the admin panel onto an axum [`RouterGroup`].
///
/// Routes are collected into the group during registration; hand the group
/// back with [`AxumIntegrator::into_group`] and mount it onto the
/// application router before serving.
#[derive(Debug)]
pub struct AxumIntegrator {
    group: RouterGroup,
    content_types: Arc<ContentTypes>,
    body_limit: usize,
}

impl AxumIntegrator {
    pub fn new(group: RouterGroup) -> Self {
        Self {
            group,
            content_types: Arc::new(ContentTypes::default()),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Replace the content-type table used by [`Integrator::serve_assets`].
    ///
    /// Only affects asset routes registered afterwards.
    pub fn with_content_types(mut self, content_types: ContentTypes) -> Self {
        self.content_types = Arc::new(content_types);
        self
    }

    /// Maximum request body size for handler routes; larger bodies get 413.
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    pub fn group(&self) -> &RouterGroup {
        &self.group
    }

    pub fn into_group(self) -> RouterGroup {
        self.group
    }
}

fn native(ctx: &dyn RequestContext) -> Option<&AxumContext> {
    ctx.as_any().downcast_ref::<AxumContext>()
}

fn native_mut(ctx: &mut dyn RequestContext) -> Option<&mut AxumContext> {
    ctx.as_any_mut().downcast_mut::<AxumContext>()
}

fn method_filter(method: Method) -> MethodFilter {
    match method {
        Method::Get => MethodFilter::GET,
        Method::Head => MethodFilter::HEAD,
        Method::Post => MethodFilter::POST,
        Method::Put => MethodFilter::PUT,
        Method::Patch => MethodFilter::PATCH,
        Method::Delete => MethodFilter::DELETE,
        Method::Options => MethodFilter::OPTIONS,
    }
}

fn path_params(params: Option<Path<HashMap<String, String>>>) -> HashMap<String, String> {
    params.map(|Path(params)| params).unwrap_or_default()
}

/// Turn an HTML handler's `(status, output)` into a response.
fn page_response(status: u16, output: String) -> Response {
    let Ok(code) = StatusCode::from_u16(status) else {
        tracing::warn!(status, "admin handler returned an invalid status code");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    if !is_redirect(status) {
        return (code, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], output).into_response();
    }

    match HeaderValue::try_from(output) {
        Ok(location) => (code, [(header::LOCATION, location)]).into_response(),
        Err(_) => {
            tracing::warn!(status, "admin handler returned an invalid redirect target");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn json_failure(err: anyhow::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new([err.to_string()])),
    )
        .into_response()
}

fn asset_response(
    renderer: &dyn TemplateRenderer,
    content_types: &ContentTypes,
    filepath: &str,
    include_body: bool,
) -> Response {
    let name = filepath.strip_prefix('/').unwrap_or(filepath);

    let content = match renderer.get_asset(name) {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(asset = name, error = %err, "admin asset not served");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let content_type = content_types.for_path(name).to_string();
    if include_body {
        (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], content).into_response()
    } else {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CONTENT_LENGTH, content.len().to_string()),
            ],
        )
            .into_response()
    }
}

impl Integrator for AxumIntegrator {
    fn handle_route(&mut self, method: Method, path: &str, handler: HandlerFunc) {
        tracing::debug!(%method, path, prefix = self.group.prefix(), "registering admin route");

        let thunk = move |params: Option<Path<HashMap<String, String>>>,
                          http_method: HttpMethod,
                          uri: Uri,
                          headers: HeaderMap,
                          body: Bytes| async move {
            let mut ctx = AxumContext::new(http_method, uri, headers, path_params(params), body);
            let (status, output) = handler(&mut ctx);
            page_response(status, output)
        };

        self.group.route(
            path,
            on(method_filter(method), thunk).layer(DefaultBodyLimit::max(self.body_limit)),
        );
    }

    fn handle_json_route(&mut self, method: Method, path: &str, handler: JsonHandlerFunc) {
        tracing::debug!(
            %method,
            path,
            prefix = self.group.prefix(),
            "registering admin json route"
        );

        let thunk = move |params: Option<Path<HashMap<String, String>>>,
                          http_method: HttpMethod,
                          uri: Uri,
                          headers: HeaderMap,
                          body: Bytes| async move {
            let mut ctx = AxumContext::new(http_method, uri, headers, path_params(params), body);
            match handler(&mut ctx) {
                Ok(()) => ctx
                    .take_response()
                    .unwrap_or_else(|| StatusCode::OK.into_response()),
                Err(err) => {
                    tracing::error!(
                        method = ctx.method(),
                        path = ctx.uri().path(),
                        error = %err,
                        "admin json handler failed"
                    );
                    json_failure(err)
                }
            }
        };

        self.group.route(
            path,
            on(method_filter(method), thunk).layer(DefaultBodyLimit::max(self.body_limit)),
        );
    }

    fn serve_assets(&mut self, prefix: &str, renderer: Arc<dyn TemplateRenderer>) {
        let route = format!("{}/*filepath", crate::group::normalize_prefix(prefix));
        tracing::debug!(route = %route, prefix = self.group.prefix(), "serving admin assets");

        let get_renderer = renderer.clone();
        let get_types = self.content_types.clone();
        let serve_get = move |Path(filepath): Path<String>| async move {
            asset_response(get_renderer.as_ref(), &get_types, &filepath, true)
        };

        let head_types = self.content_types.clone();
        let serve_head = move |Path(filepath): Path<String>| async move {
            asset_response(renderer.as_ref(), &head_types, &filepath, false)
        };

        self.group.route(&route, get(serve_get).head(serve_head));
    }

    fn get_query_param(&self, ctx: &dyn RequestContext, name: &str) -> String {
        native(ctx)
            .and_then(|ctx| ctx.query_param(name))
            .unwrap_or_default()
    }

    fn get_path_param(&self, ctx: &dyn RequestContext, name: &str) -> String {
        native(ctx)
            .and_then(|ctx| ctx.path_param(name))
            .map(str::to_string)
            .unwrap_or_default()
    }

    fn get_request_method(&self, ctx: &dyn RequestContext) -> String {
        native(ctx)
            .map(|ctx| ctx.method().to_string())
            .unwrap_or_default()
    }

    fn get_form_data(&self, ctx: &dyn RequestContext) -> Option<FormData> {
        let ctx = native(ctx)?;
        match ctx.form_data() {
            Ok(form) => Some(form),
            Err(err) => {
                tracing::debug!(error = %err, "discarding unparsable admin form");
                None
            }
        }
    }

    fn set_json_response(
        &self,
        ctx: &mut dyn RequestContext,
        status: u16,
        data: serde_json::Value,
    ) -> Result<(), IntegrationError> {
        let ctx = native_mut(ctx).ok_or(IntegrationError::InvalidContextType)?;
        if StatusCode::from_u16(status).is_err() {
            return Err(IntegrationError::InvalidStatus(status));
        }
        ctx.set_json_response(status, data);
        Ok(())
    }

    fn get_json_body(&self, ctx: &dyn RequestContext) -> Result<JsonObject, IntegrationError> {
        let ctx = native(ctx).ok_or(IntegrationError::InvalidContextType)?;
        Ok(ctx.json_body()?)
    }
}
