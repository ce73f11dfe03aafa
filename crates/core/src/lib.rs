//! Router-agnostic admin panel contract.
//!
//! The admin panel never talks to a web framework directly. It registers its
//! pages and API endpoints through an [`Integrator`] and reads request data
//! through the accessor methods on that same integrator, passing the opaque
//! [`RequestContext`] handle it was given.
//!
//! Concrete bindings (e.g. `adminbridge-axum`) implement [`Integrator`] and
//! provide their own [`RequestContext`].

pub mod context;
pub mod error;
pub mod handler;
pub mod integrator;
pub mod method;
pub mod renderer;
pub mod response;

pub use context::{FormData, JsonObject, RequestContext};
pub use error::{FormError, IntegrationError};
pub use handler::{
    HandlerFunc, JsonHandlerFunc, REDIRECT_STATUS_CODES, handler, is_redirect, json_handler,
};
pub use integrator::Integrator;
pub use method::{Method, ParseMethodError};
pub use renderer::{AssetError, EmbeddedAssets, TemplateRenderer};
pub use response::ErrorResponse;
