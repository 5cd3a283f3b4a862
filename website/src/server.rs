//! HTTP server for the website.
//!
//! One process-wide catalog is shared read-only by every connection; each
//! connection runs on its own task and each request resolves synchronously
//! from memory. Only `GET` and `HEAD` are served.

use std::convert::Infallible;
use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Bytes;
use greencert_catalog::Catalog;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::header::{ALLOW, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::{dispatch, Status};

/// Pause after a failed accept, so a persistent error such as `EMFILE` does
/// not spin the loop.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Binds `config.listen` and serves the full catalog until the process exits.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    serve_on(listener, Catalog::full()).await
}

/// Serves `catalog` on an already-bound listener.
///
/// Failed accepts and broken connections are logged and do not stop the loop.
///
/// # Errors
///
/// Returns an error if the listener's local address cannot be read.
pub async fn serve_on(listener: TcpListener, catalog: &'static Catalog) -> Result<()> {
    let bound = listener
        .local_addr()
        .context("failed to read bound address")?;
    tracing::info!(addr = %bound, certifications = catalog.len(), "listening on http://{bound}");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| async move {
                Ok::<_, Infallible>(handle(catalog, req.method(), req.uri().path()))
            });
            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(%peer, error = %e, "connection error");
            }
        });
    }
}

/// Answers one request. The query string is never consulted.
///
/// `HEAD` gets the same status and headers as `GET`; hyper drops the body.
/// Any other method gets `405 Method Not Allowed`.
#[must_use]
pub fn handle(catalog: &Catalog, method: &Method, path: &str) -> Response<Full<Bytes>> {
    let response = if method == Method::GET || method == Method::HEAD {
        let outcome = dispatch(catalog, path);
        let status = match outcome.status {
            Status::Ok => StatusCode::OK,
            Status::NotFound => StatusCode::NOT_FOUND,
        };
        html_response(status, outcome.render())
    } else {
        method_not_allowed()
    };
    tracing::info!(%method, path, status = response.status().as_u16(), "request");
    response
}

fn html_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from_static(b"internal error"))))
}

fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header(ALLOW, "GET, HEAD")
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from_static(b"method not allowed\n")))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from_static(b"internal error"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_are_ok() {
        let catalog = Catalog::full();
        for path in ["/", "/certifications", "/certification/esg-rating", "/industries", "/contact"] {
            assert_eq!(handle(catalog, &Method::GET, path).status(), StatusCode::OK, "{path}");
        }
    }

    #[test]
    fn unknown_slug_is_404() {
        let response = handle(Catalog::full(), &Method::GET, "/certification/does-not-exist");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("text/html; charset=utf-8")
        );
    }

    #[test]
    fn head_matches_get_status() {
        let catalog = Catalog::full();
        assert_eq!(handle(catalog, &Method::HEAD, "/").status(), StatusCode::OK);
        assert_eq!(handle(catalog, &Method::HEAD, "/missing").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn accept_backoff_is_short_but_nonzero() {
        assert!(ACCEPT_BACKOFF > Duration::ZERO);
        assert!(ACCEPT_BACKOFF <= Duration::from_secs(1));
    }

    #[test]
    fn other_methods_are_rejected() {
        let response = handle(Catalog::full(), &Method::POST, "/contact");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(ALLOW).and_then(|v| v.to_str().ok()),
            Some("GET, HEAD")
        );
    }
}
