//! The contract every router binding fulfils.

use std::sync::Arc;

use crate::context::{FormData, JsonObject, RequestContext};
use crate::error::IntegrationError;
use crate::handler::{HandlerFunc, JsonHandlerFunc};
use crate::method::Method;
use crate::renderer::TemplateRenderer;

/// Binds the admin panel to one concrete web router.
///
/// Registration methods are called once at startup, before the router
/// serves traffic. Accessors are called from inside handlers with the
/// context the router passed in; a context produced by a different router
/// is rejected (empty value for reads, [`IntegrationError::InvalidContextType`]
/// for body access and writes).
pub trait Integrator: Send + Sync {
    fn handle_route(&mut self, method: Method, path: &str, handler: HandlerFunc);

    fn handle_json_route(&mut self, method: Method, path: &str, handler: JsonHandlerFunc);

    /// Serve `renderer`'s assets under `prefix/*`.
    fn serve_assets(&mut self, prefix: &str, renderer: Arc<dyn TemplateRenderer>);

    fn get_query_param(&self, ctx: &dyn RequestContext, name: &str) -> String;

    fn get_path_param(&self, ctx: &dyn RequestContext, name: &str) -> String;

    fn get_request_method(&self, ctx: &dyn RequestContext) -> String;

    /// `None` for a foreign context or when the form cannot be parsed.
    fn get_form_data(&self, ctx: &dyn RequestContext) -> Option<FormData>;

    fn set_json_response(
        &self,
        ctx: &mut dyn RequestContext,
        status: u16,
        data: serde_json::Value,
    ) -> Result<(), IntegrationError>;

    fn get_json_body(&self, ctx: &dyn RequestContext) -> Result<JsonObject, IntegrationError>;
}
