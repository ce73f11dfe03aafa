//! axum binding for the admin panel contract.
//!
//! ```no_run
//! use adminbridge_axum::{AxumIntegrator, RouterGroup};
//!
//! let integrator = AxumIntegrator::new(RouterGroup::new("/admin"));
//! // ... let the admin panel register its routes on `integrator` ...
//! let app = integrator.into_group().mount(axum::Router::new());
//! # let _ = app;
//! ```

pub mod content_type;
pub mod context;
pub mod demo;
pub mod form;
pub mod group;
pub mod integrator;

pub use content_type::{ContentTypes, DEFAULT_CONTENT_TYPE};
pub use context::AxumContext;
pub use group::RouterGroup;
pub use integrator::{AxumIntegrator, DEFAULT_BODY_LIMIT, HTML_CONTENT_TYPE};
