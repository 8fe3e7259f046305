#[macro_export]
macro_rules! route_service {
    {$($method:tt $pattern:expr => $data:expr),+ ; _ => $default:expr} => {{
        let mut __mux = $crate::RouteMux::new();
        $(route_service!(@entry __mux, $method, $pattern, $data);)+
        __mux.with_default($default)
    }};

    {$($method:tt $pattern:expr => $data:expr),+} => {{
        let mut __mux = $crate::RouteMux::new();
        $(route_service!(@entry __mux, $method, $pattern, $data);)+
        __mux
    }};

    {@entry $mux:expr, GET, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::GET, $pattern, $data)
    };
    {@entry $mux:expr, POST, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::POST, $pattern, $data)
    };
    {@entry $mux:expr, PUT, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::PUT, $pattern, $data)
    };
    {@entry $mux:expr, DELETE, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::DELETE, $pattern, $data)
    };
    {@entry $mux:expr, HEAD, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::HEAD, $pattern, $data)
    };
    {@entry $mux:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::OPTIONS, $pattern, $data)
    };
    {@entry $mux:expr, CONNECT, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::CONNECT, $pattern, $data)
    };
    {@entry $mux:expr, PATCH, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::PATCH, $pattern, $data)
    };
    {@entry $mux:expr, TRACE, $pattern:expr, $data:expr} => {
        $mux.route($crate::Method::TRACE, $pattern, $data)
    };
}
