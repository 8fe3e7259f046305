#![cfg(feature = "hyper-service")]

use route_store::{route_service, OwnedParams};

use std::convert::Infallible as Never;

use hyper::service::Service;
use hyper::{Body, Method, Request, Response};

async fn greet(_: Request<Body>, params: OwnedParams) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or("nobody");
    Ok(Response::new(Body::from(format!("hello, {}", name))))
}

async fn tail(_: Request<Body>, params: OwnedParams) -> Result<Response<Body>, Never> {
    Ok(Response::new(Body::from(
        params.get("*").unwrap_or("").to_owned(),
    )))
}

async fn not_found(_: Request<Body>, _: OwnedParams) -> Result<Response<Body>, Never> {
    Ok(Response::builder().status(404).body(Body::empty()).unwrap())
}

async fn body_text(res: Response<Body>) -> String {
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn dispatches_to_matching_handler() {
    let mut service = route_service! {
        GET "/hello/:name" => greet,
        GET "/files/*" => tail;
        _ => not_found
    }
    .into_shared();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/hello/world")
        .body(Body::empty())
        .unwrap();
    let res = service.call(req).await.unwrap();
    assert_eq!(body_text(res).await, "hello, world");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/files/a/b.txt")
        .body(Body::empty())
        .unwrap();
    let res = service.call(req).await.unwrap();
    assert_eq!(body_text(res).await, "a/b.txt");

    let req = Request::builder()
        .method(Method::POST)
        .uri("/hello/world")
        .body(Body::empty())
        .unwrap();
    let res = service.call(req).await.unwrap();
    assert_eq!(res.status(), 404);
}
