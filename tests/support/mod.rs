use std::net::SocketAddr;
use std::path::Path;

use axum::{http::StatusCode, routing::get, Router};
use interest_frontend::{serve, Config, Variant};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const TEST_INDEX: &str = "<p id=\"amount\">{{amount}}</p>\n<p id=\"result\">{{result}}</p>\n<p id=\"backend\">{{backend_version}}</p>\n";
pub const TEST_DIAGRAM: &str = "<svg><text>{{app_version}}</text><text>{{backend_version}}</text></svg>";

/// How the fake interest backend answers.
#[derive(Clone, Copy)]
pub enum Backend {
    Answers {
        interest: &'static str,
        version: &'static str,
    },
    Fails(StatusCode),
    /// Nothing listens on the backend port.
    Down,
}

pub async fn spawn_backend(backend: Backend) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind backend");
    let addr = listener.local_addr().expect("backend addr");

    let app = match backend {
        Backend::Answers { interest, version } => Router::new()
            .route("/api/v1/interest", get(move || async move { interest }))
            .route("/version", get(move || async move { version })),
        Backend::Fails(status) => Router::new()
            .route("/api/v1/interest", get(move || async move { status }))
            .route("/version", get(move || async move { status })),
        Backend::Down => {
            drop(listener);
            return addr;
        }
    };

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("backend server");
    });
    addr
}

pub fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), TEST_INDEX).expect("write index");
    std::fs::write(dir.path().join("diagram.svg"), TEST_DIAGRAM).expect("write diagram");
    std::fs::write(dir.path().join("style.css"), "body {}").expect("write css");
    dir
}

pub async fn spawn_frontend(variant: Variant, backend: SocketAddr, static_dir: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind frontend");
    let addr = listener.local_addr().expect("frontend addr");

    let config = Config {
        variant,
        bind_address: "127.0.0.1".to_string(),
        port: addr.port(),
        app_version: "1.4.0".to_string(),
        backend_host: backend.ip().to_string(),
        backend_port: backend.port(),
        static_dir: static_dir.to_path_buf(),
    };

    tokio::spawn(async move {
        serve(listener, config).await.expect("frontend server");
    });
    format!("http://{}", addr)
}

/// Pulls the text of `<p id="{id}">` out of a rendered test page.
pub fn paragraph(page: &str, id: &str) -> String {
    let open = format!("<p id=\"{}\">", id);
    let start = page.find(&open).expect("paragraph present") + open.len();
    let end = page[start..].find("</p>").expect("paragraph closed") + start;
    page[start..end].to_string()
}
