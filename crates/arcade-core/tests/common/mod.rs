//! Shared helpers for integration tests

#![allow(dead_code)]

use arcade_core::{ProductConfig, ProjectConfig};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Product pointing at an arbitrary release endpoint
#[derive(Clone)]
pub struct StubProduct {
    pub release_url: &'static str,
}

impl StubProduct {
    pub fn new(release_url: String) -> Self {
        Self {
            release_url: Box::leak(release_url.into_boxed_str()),
        }
    }
}

impl ProductConfig for StubProduct {
    fn name(&self) -> &'static str {
        "arcade-it"
    }

    fn display_name(&self) -> &'static str {
        "ARCADE IT"
    }

    fn tagline(&self) -> &'static str {
        "integration tests"
    }

    fn release_url(&self) -> &'static str {
        self.release_url
    }

    fn release_url_env(&self) -> &'static str {
        "ARCADE_IT_RELEASE_URL_UNSET"
    }

    fn fallback_release(&self) -> &'static str {
        "v1.0.0"
    }

    fn asset_dir_env(&self) -> &'static str {
        "ARCADE_IT_ASSET_DIR_UNSET"
    }

    fn next_steps(&self, dir: &Path, _project: &ProjectConfig) -> Vec<String> {
        vec![format!("cd {}", dir.display())]
    }
}

/// Minimal HTTP/1.1 server answering fixed bodies per path; 404 otherwise
pub async fn serve(routes: HashMap<&'static str, (u16, Vec<u8>)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = routes
                    .get(path.as_str())
                    .cloned()
                    .unwrap_or((404, b"not found".to_vec()));
                let head = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status,
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(&body).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Local asset mirror with every catalog file
pub fn full_mirror(tag: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for header in [
        "arcade.h",
        "stb_image.h",
        "stb_image_write.h",
        "stb_image_resize2.h",
    ] {
        let path = dir.path().join("arcade").join(header);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("// {}\n", header)).unwrap();
    }
    std::fs::create_dir_all(dir.path().join("assets")).unwrap();
    std::fs::write(
        dir.path().join("assets/background_music.wav"),
        [0x52, 0x49, 0x46, 0x46, 0xFF, 0x00],
    )
    .unwrap();
    std::fs::write(
        dir.path().join("release.json"),
        format!(r#"{{"tag_name": "{}"}}"#, tag),
    )
    .unwrap();
    dir
}
