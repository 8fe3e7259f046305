#![forbid(unsafe_code)]

mod error;
mod params;
mod tree;

pub mod mux;

pub use self::error::RouteError;
pub use self::mux::{Method, RouteMux};
pub use self::params::{Param, RouteParams, INLINE_PARAMS};

#[cfg(feature = "hyper-service")]
pub mod hyper_service;
#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{Handler, OwnedParams, RouteService};
