use super::params::OwnedParams;
use super::{BoxError, BoxFuture, Future, Request, Response, StdError};

/// An async request handler fed with the parameters bound by the mux.
///
/// Implemented for any `Fn(Request, OwnedParams) -> impl Future` whose error
/// converts into a boxed error.
pub trait Handler {
    fn call(
        &self,
        req: Request,
        params: OwnedParams,
    ) -> BoxFuture<'static, Result<Response, BoxError>>;
}

pub type BoxHandler = Box<dyn Handler + Send + Sync>;

impl Handler for BoxHandler {
    fn call(
        &self,
        req: Request,
        params: OwnedParams,
    ) -> BoxFuture<'static, Result<Response, BoxError>> {
        Handler::call(&**self, req, params)
    }
}

impl<F, E, Fut> Handler for F
where
    F: Fn(Request, OwnedParams) -> Fut,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
{
    fn call(
        &self,
        req: Request,
        params: OwnedParams,
    ) -> BoxFuture<'static, Result<Response, BoxError>> {
        let fut = (self)(req, params);
        Box::pin(async move {
            match fut.await {
                Ok(r) => Ok(r),
                Err(e) => Err(Box::new(e) as BoxError),
            }
        })
    }
}
