//! End-to-end HTTP checks against a live listener.

use greencert_catalog::Catalog;
use greencert_website::server::serve_on;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn get(addr: std::net::SocketAddr, method: &str, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let request = format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.expect("write");
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("read");
    String::from_utf8_lossy(&response).into_owned()
}

async fn start() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(serve_on(listener, Catalog::full()));
    addr
}

#[tokio::test]
async fn serves_detail_page() {
    let addr = start().await;
    let response = get(addr, "GET", "/certification/green-business").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.contains("<title>Green Business Certification | GreenCert</title>"));
}

#[tokio::test]
async fn unknown_slug_is_404_over_the_wire() {
    let addr = start().await;
    let response = get(addr, "GET", "/certification/does-not-exist").await;
    assert!(response.starts_with("HTTP/1.1 404 Not Found"), "{response}");
    assert!(response.contains("Page Not Found"));
}

#[tokio::test]
async fn query_string_is_ignored() {
    let addr = start().await;
    let response = get(addr, "GET", "/contact?from=home").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
}

#[tokio::test]
async fn concurrent_requests_are_served() {
    let addr = start().await;
    let mut tasks = Vec::new();
    for slug in Catalog::full().slugs() {
        tasks.push(tokio::spawn(async move {
            get(addr, "GET", &format!("/certification/{slug}")).await
        }));
    }
    for task in tasks {
        let response = task.await.expect("join");
        assert!(response.starts_with("HTTP/1.1 200 OK"));
    }
}

#[tokio::test]
async fn post_is_rejected() {
    let addr = start().await;
    let response = get(addr, "POST", "/contact").await;
    assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed"), "{response}");
}
