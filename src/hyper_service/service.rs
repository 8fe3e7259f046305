use super::handler::{BoxHandler, Handler};
use super::params::OwnedParams;
use super::{BoxError, BoxFuture, Request, Response};

use crate::mux::{Method, RouteMux};

use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;

/// A hyper service that dispatches each request through a [`RouteMux`],
/// falling back to a default handler when no route matches.
pub struct RouteService<H = BoxHandler> {
    mux: RouteMux<H>,
    default: H,
}

impl<H> Service<Request> for RouteService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        RouteService::handle(self, req)
    }
}

impl<H> Service<Request> for &'_ RouteService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        RouteService::handle(self, req)
    }
}

impl<H> RouteService<H>
where
    H: Handler,
{
    fn handle(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let method = req.method();
        let path = req.uri().path();
        let (handler, params) = match self.mux.find(method, path) {
            Some((h, p)) => (h, OwnedParams::new(path, &p)),
            None => (&self.default, OwnedParams::empty()),
        };
        Handler::call(handler, req, params)
    }

    pub fn new(default: H) -> Self {
        Self::from_mux(RouteMux::new(), default)
    }

    pub fn from_mux(mux: RouteMux<H>, default: H) -> Self {
        Self { mux, default }
    }

    /// Wraps the service in an `Arc` so it can be handed to every
    /// connection of a hyper server.
    pub fn into_shared(self) -> SharedRouteService<H> {
        SharedRouteService(Arc::new(self))
    }
}

/// Cheaply cloneable [`RouteService`], one clone per connection.
pub struct SharedRouteService<H = BoxHandler>(Arc<RouteService<H>>);

impl<H> Clone for SharedRouteService<H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<H> Service<Request> for SharedRouteService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        RouteService::handle(&self.0, req)
    }
}

impl RouteMux<BoxHandler> {
    /// Registers an async handler, panicking on an invalid pattern.
    pub fn route(
        &mut self,
        method: Method,
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.insert(method, pattern, Box::new(h))
    }

    pub fn with_default(self, default: impl Handler + Send + Sync + 'static) -> RouteService {
        RouteService::from_mux(self, Box::new(default))
    }
}
