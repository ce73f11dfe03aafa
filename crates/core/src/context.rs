//! The per-request capability interface handed to admin handlers.

use std::any::Any;
use std::collections::HashMap;

use crate::error::FormError;

/// Parsed form values; repeated keys keep every value in arrival order.
pub type FormData = HashMap<String, Vec<String>>;

/// A generic string-keyed JSON object.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// One in-flight request/response pair, owned by the concrete router.
///
/// Handlers receive it as `&mut dyn RequestContext` and must not keep it past
/// the callback. Integrators use [`RequestContext::as_any`] to confirm that a
/// handle was produced by their own router before touching it.
pub trait RequestContext: Send {
    /// Upper-case HTTP method name.
    fn method(&self) -> &str;

    /// First value of the query parameter `name`.
    fn query_param(&self, name: &str) -> Option<String>;

    fn path_param(&self, name: &str) -> Option<&str>;

    /// URL-encoded form values (body pairs first, then query pairs).
    fn form_data(&self) -> Result<FormData, FormError>;

    /// The raw request body.
    fn body(&self) -> &[u8];

    /// The body as a JSON object; a literal `null` yields an empty object.
    fn json_body(&self) -> Result<JsonObject, serde_json::Error> {
        let object: Option<JsonObject> = serde_json::from_slice(self.body())?;
        Ok(object.unwrap_or_default())
    }

    /// Store a JSON response to be written once the handler returns.
    fn set_json_response(&mut self, status: u16, data: serde_json::Value);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
