use route_store::{route_mux, Method, RouteMux};

/// The representation of an API or microservice behind the gateway.
#[derive(Debug)]
struct Service {
    name: &'static str,
    version: &'static str,
}

fn main() {
    tracing_subscriber::fmt::init();

    let hello = Service {
        name: "Hello",
        version: "V1",
    };

    let mux: RouteMux<&Service> = route_mux! {
        GET "/people" => &hello,
        GET "/people/:id" => &hello,
        GET "/people/:id/tasks" => &hello,
        GET "/people/:last/:first" => &hello
    };

    println!("GET /people/1234");
    let (service, params) = mux
        .find(&Method::GET, "/people/1234")
        .expect("could not match");
    println!("\tService {}, Version {}", service.name, service.version);
    println!("\tPerson ID: {}", params.get("id").unwrap_or_default());

    println!("GET /people/doe/john");
    let (service, params) = mux
        .find(&Method::GET, "/people/doe/john")
        .expect("could not match");
    println!("\tService {}, Version {}", service.name, service.version);
    println!(
        "\tPerson Name: {} {}",
        params.get("first").unwrap_or_default(),
        params.get("last").unwrap_or_default()
    );
}
