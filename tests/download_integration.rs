// SPDX-License-Identifier: MPL-2.0
//! Download tests against a throwaway local HTTP server.

use iced_carousel::error::Error;
use iced_carousel::gallery::GalleryImage;
use iced_carousel::media::{self, fetch};
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const BODY: &[u8] = b"\xFF\xD8\xFFfake jpeg payload\xFF\xD9";

/// Serves a single response on a random port and returns its base URL.
async fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = [0_u8; 2048];
        let _ = socket.read(&mut request).await;
        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

/// Serves `connections` requests, each body dribbled out in small chunks so
/// that downloads overlap.
async fn serve_slowly(connections: usize, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        for _ in 0..connections {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut request = [0_u8; 2048];
                let _ = socket.read(&mut request).await;
                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                for chunk in body.chunks(1000) {
                    let _ = socket.write_all(chunk).await;
                    let _ = socket.flush().await;
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

fn image(url: String) -> GalleryImage {
    GalleryImage::new(1, url, "Утренний кофе", "Интимный момент за чашкой кофе")
}

fn leftover_parts(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "part"))
                .count()
        })
        .unwrap_or(0)
}

#[tokio::test]
async fn successful_download_writes_titled_file() {
    let base = serve_once("200 OK", BODY).await;
    let dir = tempdir().expect("failed to create temp dir");
    let client = fetch::client().expect("client");

    let path = media::download_image(client, image(format!("{base}/photo.jpg")), dir.path().into())
        .await
        .expect("download should succeed");

    assert_eq!(path, dir.path().join("Утренний кофе.jpg"));
    assert_eq!(std::fs::read(&path).expect("read"), BODY);
    assert_eq!(leftover_parts(dir.path()), 0);
}

#[tokio::test]
async fn known_image_extension_is_kept_from_url() {
    let base = serve_once("200 OK", BODY).await;
    let dir = tempdir().expect("failed to create temp dir");
    let client = fetch::client().expect("client");

    let path = media::download_image(
        client,
        image(format!("{base}/photo.PNG?w=1200")),
        dir.path().into(),
    )
    .await
    .expect("download should succeed");

    assert_eq!(path, dir.path().join("Утренний кофе.png"));
}

#[tokio::test]
async fn second_download_does_not_overwrite_first() {
    let dir = tempdir().expect("failed to create temp dir");
    let client = fetch::client().expect("client");

    for expected in ["Утренний кофе.jpg", "Утренний кофе (1).jpg"] {
        let base = serve_once("200 OK", BODY).await;
        let path = media::download_image(
            client.clone(),
            image(format!("{base}/photo.jpg")),
            dir.path().into(),
        )
        .await
        .expect("download should succeed");
        assert_eq!(path, dir.path().join(expected));
    }
}

#[tokio::test]
async fn not_found_is_reported_as_http_error() {
    let base = serve_once("404 Not Found", b"").await;
    let dir = tempdir().expect("failed to create temp dir");
    let client = fetch::client().expect("client");

    let result =
        media::download_image(client, image(format!("{base}/missing.jpg")), dir.path().into())
            .await;

    assert!(matches!(result, Err(Error::Http(404))));
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let dir = tempdir().expect("failed to create temp dir");
    let client = fetch::client().expect("client");
    let result =
        media::download_image(client, image(format!("http://{addr}/photo.jpg")), dir.path().into())
            .await;

    assert!(matches!(result, Err(Error::Network(_))));
    assert_eq!(leftover_parts(dir.path()), 0);
}

#[tokio::test]
async fn fetch_bytes_returns_body() {
    let base = serve_once("200 OK", BODY).await;
    let client = fetch::client().expect("client");
    let bytes = media::fetch_bytes(client, format!("{base}/photo.jpg"))
        .await
        .expect("fetch should succeed");
    assert_eq!(bytes, BODY);
}

#[tokio::test]
async fn overlapping_downloads_of_one_slide_both_succeed() {
    static LARGE: [u8; 4000] = [0xAB; 4000];
    let base = serve_slowly(2, &LARGE).await;
    let dir = tempdir().expect("failed to create temp dir");
    let client = fetch::client().expect("client");
    let url = format!("{base}/same.jpg");
    let same = || GalleryImage::new(9, url.clone(), "Same", "");

    let first = media::download_image(client.clone(), same(), dir.path().into());
    let second = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        media::download_image(client.clone(), same(), dir.path().into()).await
    };
    let (first, second) = tokio::join!(first, second);

    let first = first.expect("first download should succeed");
    let second = second.expect("second download should succeed");
    let mut saved = vec![first, second];
    saved.sort();
    assert_eq!(
        saved,
        vec![dir.path().join("Same (1).jpg"), dir.path().join("Same.jpg")]
    );
    for path in &saved {
        assert_eq!(std::fs::read(path).expect("read"), LARGE);
    }
    assert_eq!(leftover_parts(dir.path()), 0);
}
