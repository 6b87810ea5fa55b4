//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;

use siteserve::{HttpServer, Shutdown, SiteConfig};

/// A running server over a temporary site root and data directory.
pub struct TestSite {
    pub addr: SocketAddr,
    pub data_file: PathBuf,
    pub public_dir: PathBuf,
    pub shutdown: Shutdown,
    _tmp: TempDir,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn stored_lines(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.data_file) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Spawn a server on an ephemeral port with a small fixture site.
///
/// Fixture layout under the site root:
/// `index.html`, `about.html`, `team/index.html`, `assets/style.css`,
/// `404.html`.
pub async fn start_site(configure: impl FnOnce(&mut SiteConfig)) -> TestSite {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let public_dir = tmp.path().join("public");
    let data_file = tmp.path().join("data").join("inquiries.ndjson");

    std::fs::create_dir_all(public_dir.join("team")).unwrap();
    std::fs::create_dir_all(public_dir.join("assets")).unwrap();
    std::fs::write(public_dir.join("index.html"), "<h1>Home</h1>").unwrap();
    std::fs::write(public_dir.join("about.html"), "<h1>About</h1>").unwrap();
    std::fs::write(public_dir.join("team/index.html"), "<h1>Team</h1>").unwrap();
    std::fs::write(public_dir.join("assets/style.css"), "body { margin: 0 }").unwrap();
    std::fs::write(public_dir.join("404.html"), "<h1>Lost?</h1>").unwrap();

    let mut config = SiteConfig::default();
    config.content.public_dir = public_dir.to_string_lossy().into_owned();
    config.contact.data_file = data_file.to_string_lossy().into_owned();
    configure(&mut config);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestSite {
        addr,
        data_file,
        public_dir,
        shutdown,
        _tmp: tmp,
    }
}

/// A contact payload that passes every validation rule.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Aiko Tanaka",
        "organization": "Tanaka Koi Farm",
        "email": "aiko@example.com",
        "inquiryType": "wholesale",
        "message": "I would like to discuss a bulk order of show-grade ranchu.",
        "privacyConsent": true,
        "website": ""
    })
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build http client")
}
