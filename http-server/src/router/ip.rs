use std::net::{AddrParseError, IpAddr};
use std::str::FromStr;

use axum::extract::Path;
use axum::http::Method;
use axum::{Extension, Json};
use ipgeo::ip::lookup::IpLookupCommand;
use ipgeo::prelude::HttpCommand;
use ipgeo::record::IpRecord;

#[derive(serde::Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("method {0} is not allowed on this route, only GET")]
    MethodNotAllowed(Method),
    #[error("an address is expected in the path")]
    MissingAddress,
    #[error("unable to parse the requested address")]
    InvalidAddress(#[source] AddrParseError),
    #[error("unable to look up the requested address")]
    UnableLookup(#[source] ipgeo::Error),
}

impl Error {
    fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::MethodNotAllowed(_) => axum::http::StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingAddress | Self::InvalidAddress(_) => axum::http::StatusCode::BAD_REQUEST,
            // the provider rejected the address, it holds no data for it
            Self::UnableLookup(ipgeo::Error::Provider { .. }) => axum::http::StatusCode::NOT_FOUND,
            Self::UnableLookup(_) => axum::http::StatusCode::BAD_GATEWAY,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::InvalidAddress(inner) => Some(inner.to_string()),
            Self::UnableLookup(inner) => Some(inner.to_string()),
            _ => None,
        }
    }

    fn response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = self.response();

        (status, Json(body)).into_response()
    }
}

pub(crate) async fn lookup_handler(
    Extension(client): Extension<ipgeo::Client>,
    Path(ip): Path<String>,
) -> Result<Json<IpRecord>, Error> {
    let addr = IpAddr::from_str(ip.as_str()).map_err(Error::InvalidAddress)?;
    let record = IpLookupCommand::new(addr)
        .execute(&client)
        .await
        .map_err(Error::UnableLookup)?;
    Ok(Json(record))
}

pub(crate) async fn index_handler() -> Error {
    Error::MissingAddress
}

pub(crate) async fn method_handler(method: Method) -> Error {
    Error::MethodNotAllowed(method)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Extension;
    use tower::ServiceExt;

    fn client(base_url: &str) -> ipgeo::Client {
        ipgeo::ClientBuilder::default()
            .with_endpoint(ipgeo::Endpoint::new(base_url))
            .build()
            .unwrap()
    }

    fn app(base_url: &str) -> axum::Router {
        crate::router::router().layer(Extension(client(base_url)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn lookup_returns_the_requested_address() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/8.8.8.8/json")
            .with_status(200)
            .with_body(r#"{ "ip": "8.8.8.8", "city": "Mountain View", "country": "US" }"#)
            .create_async()
            .await;
        let response = app(&server.url())
            .oneshot(
                Request::builder()
                    .uri("/ip/8.8.8.8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ip"], "8.8.8.8");
        assert_eq!(body["city"], "Mountain View");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn non_get_method_is_rejected_before_any_lookup() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let response = app(&server.url())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ip/8.8.8.8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("POST"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn missing_address_is_rejected_before_any_lookup() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        for uri in ["/ip", "/ip/"] {
            let response = app(&server.url())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
        m.assert_async().await;
    }

    #[tokio::test]
    async fn unparseable_address_is_rejected_before_any_lookup() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let response = app(&server.url())
            .oneshot(
                Request::builder()
                    .uri("/ip/not-an-address")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["details"].is_string());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn provider_rejection_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/127.0.0.1/json")
            .with_status(200)
            .with_body(r#"{ "ip": "127.0.0.1", "error": true, "reason": "Reserved IP Address" }"#)
            .create_async()
            .await;
        let response = app(&server.url())
            .oneshot(
                Request::builder()
                    .uri("/ip/127.0.0.1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("Reserved IP Address"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn provider_transport_failure_maps_to_bad_gateway() {
        // nothing listens on this port
        let response = app("http://127.0.0.1:1")
            .oneshot(
                Request::builder()
                    .uri("/ip/8.8.8.8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn sparse_provider_data_keeps_absent_fields_out_of_the_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/8.8.4.4/json")
            .with_status(200)
            .with_body(r#"{ "ip": "8.8.4.4" }"#)
            .create_async()
            .await;
        let response = app(&server.url())
            .oneshot(
                Request::builder()
                    .uri("/ip/8.8.4.4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "ip": "8.8.4.4" }));
    }
}
