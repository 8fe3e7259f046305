use route_store::{route_service, OwnedParams};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response};

async fn not_found(req: Request<Body>, _: OwnedParams) -> Result<Response<Body>, Never> {
    dbg!((req.method(), req.uri().path()));
    let res = hyper::Response::builder()
        .status(404)
        .body(hyper::Body::from("404 Not Found"))
        .unwrap();
    Ok(res)
}

async fn hello(_: Request<Body>, params: OwnedParams) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap();
    dbg!(name);
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn file(_: Request<Body>, params: OwnedParams) -> Result<Response<Body>, Never> {
    let path = params.get("*").unwrap();
    dbg!(path);
    Ok(Response::new(Body::from(format!("access file: {}", path))))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let service = route_service! {
        GET "/hello/:name" => hello,
        GET "/files/*" => file;
        _ => not_found
    }
    .into_shared();

    let make = make_service_fn(|_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("files: http://{}/files/path/to/public/file", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    server.await.unwrap();
}
