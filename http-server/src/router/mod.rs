mod ip;

pub(crate) fn router() -> axum::Router {
    // the method fallback answers 405 before any lookup is attempted
    axum::Router::new()
        .route(
            "/ip",
            axum::routing::get(ip::index_handler).fallback(ip::method_handler),
        )
        .route(
            "/ip/",
            axum::routing::get(ip::index_handler).fallback(ip::method_handler),
        )
        .route(
            "/ip/:ip",
            axum::routing::get(ip::lookup_handler).fallback(ip::method_handler),
        )
}
