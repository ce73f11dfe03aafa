//! The axum-side request context handed to admin handlers.

use std::any::Any;
use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use adminbridge_core::{FormData, FormError, RequestContext};

use crate::form;

/// One in-flight axum request plus the response the handler wrote, if any.
///
/// Built by the integrator's route thunks after axum has buffered the body,
/// so every accessor is synchronous.
pub struct AxumContext {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    path_params: HashMap<String, String>,
    body: Bytes,
    response: Option<Response>,
}

impl AxumContext {
    pub fn new(
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        path_params: HashMap<String, String>,
        body: Bytes,
    ) -> Self {
        Self {
            method,
            uri,
            headers,
            path_params,
            body,
            response: None,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    pub(crate) fn take_response(&mut self) -> Option<Response> {
        self.response.take()
    }
}

impl RequestContext for AxumContext {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        form::query_value(self.uri.query()?, name)
    }

    fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    fn form_data(&self) -> Result<FormData, FormError> {
        let content_type = match self.headers.get(header::CONTENT_TYPE) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| FormError::InvalidContentType(format!("{value:?}")))?,
            ),
            None => None,
        };

        form::parse_form(
            self.method.as_str(),
            content_type,
            self.uri.query(),
            &self.body,
        )
    }

    fn body(&self) -> &[u8] {
        &self.body
    }

    fn set_json_response(&mut self, status: u16, data: serde_json::Value) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.response = Some((status, Json(data)).into_response());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn context(method: Method, uri: &str, content_type: Option<&str>, body: &str) -> AxumContext {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
        }
        let params = HashMap::from([("id".to_string(), "42".to_string())]);
        AxumContext::new(
            method,
            uri.parse().unwrap(),
            headers,
            params,
            Bytes::from(body.to_string()),
        )
    }

    #[test]
    fn reads_request_parts() {
        let ctx = context(Method::GET, "/users/42?tab=roles&tab=audit", None, "");

        assert_eq!(ctx.method(), "GET");
        assert_eq!(ctx.query_param("tab").as_deref(), Some("roles"));
        assert_eq!(ctx.query_param("missing"), None);
        assert_eq!(ctx.path_param("id"), Some("42"));
        assert_eq!(ctx.path_param("slug"), None);
    }

    #[test]
    fn json_body_requires_an_object() {
        let ctx = context(Method::POST, "/", Some("application/json"), r#"{"x":1}"#);
        assert_eq!(
            serde_json::Value::Object(ctx.json_body().unwrap()),
            json!({ "x": 1 })
        );

        let list = context(Method::POST, "/", Some("application/json"), "[1,2]");
        assert!(list.json_body().is_err());
    }

    #[test]
    fn null_json_body_is_an_empty_object() {
        let ctx = context(Method::POST, "/", Some("application/json"), "null");
        assert_eq!(ctx.json_body().unwrap(), serde_json::Map::new());

        let padded = context(Method::POST, "/", Some("application/json"), " null\n");
        assert!(padded.json_body().unwrap().is_empty());
    }

    #[test]
    fn stores_json_response() {
        let mut ctx = context(Method::POST, "/", None, "");
        assert!(!ctx.has_response());

        ctx.set_json_response(201, json!({ "ok": true }));

        let response = ctx.take_response().unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
    }
}
