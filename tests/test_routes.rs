use stashd::config::Config;
use stashd::http::request::{Method, Request};
use stashd::http::response::StatusCode;
use stashd::routes;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn request(method: Method, path: &str) -> Request {
    Request {
        method,
        path: path.to_string(),
        headers: HashMap::new(),
        body: Vec::new(),
    }
}

fn config_with_root(root: &Path) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        files_dir: Some(root.to_path_buf()),
    }
}

fn temp_root(tag: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("stashd-routes-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    root
}

#[tokio::test]
async fn test_root_ping_is_empty_200() {
    let cfg = Config::default();
    let resp = routes::dispatch(&request(Method::Get, ""), &cfg).await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert!(resp.headers.is_empty());
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn test_echo_returns_text_after_prefix() {
    let cfg = Config::default();
    let resp = routes::dispatch(&request(Method::Get, "echo/abc"), &cfg).await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.header("Content-Type").unwrap(), "text/plain");
    assert_eq!(resp.header("Content-Length").unwrap(), "3");
    assert_eq!(resp.body, b"abc".to_vec());
}

#[tokio::test]
async fn test_echo_of_nothing_is_empty_200() {
    let cfg = Config::default();
    let resp = routes::dispatch(&request(Method::Get, "echo/"), &cfg).await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.header("Content-Length").unwrap(), "0");
}

#[tokio::test]
async fn test_user_agent_is_echoed() {
    let cfg = Config::default();
    let mut req = request(Method::Get, "user-agent");
    req.headers
        .insert("User-Agent".to_string(), "curl/8.1.2".to_string());

    let resp = routes::dispatch(&req, &cfg).await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.body, b"curl/8.1.2".to_vec());
    assert_eq!(resp.header("Content-Length").unwrap(), "10");
}

#[tokio::test]
async fn test_missing_user_agent_is_empty_200() {
    let cfg = Config::default();
    let resp = routes::dispatch(&request(Method::Get, "user-agent"), &cfg).await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert!(resp.body.is_empty());
    assert_eq!(resp.header("Content-Length").unwrap(), "0");
}

#[tokio::test]
async fn test_files_fetch_forces_octet_stream() {
    let root = temp_root("fetch");
    std::fs::write(root.join("doc.txt"), b"stash").unwrap();
    let cfg = config_with_root(&root);

    let resp = routes::dispatch(&request(Method::Get, "files/doc.txt"), &cfg).await;

    assert_eq!(resp.status, StatusCode::Ok);
    // txt would be text/plain anywhere else; the files route forces this
    assert_eq!(
        resp.header("Content-Type").unwrap(),
        "application/octet-stream"
    );
    assert_eq!(resp.body, b"stash".to_vec());
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_files_fetch_missing_is_404_with_empty_body() {
    let root = temp_root("fetch-missing");
    let cfg = config_with_root(&root);

    let resp = routes::dispatch(&request(Method::Get, "files/absent.txt"), &cfg).await;

    assert_eq!(resp.status, StatusCode::NotFound);
    assert!(resp.body.is_empty());
    assert!(resp.headers.is_empty());
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_files_fetch_of_directory_is_404() {
    let root = temp_root("fetch-dir");
    std::fs::create_dir_all(root.join("sub")).unwrap();
    let cfg = config_with_root(&root);

    // Opening a directory is a read failure, not a miss, but on the wire
    // every GET fetch failure is 404.
    let resp = routes::dispatch(&request(Method::Get, "files/sub"), &cfg).await;

    assert_eq!(resp.status, StatusCode::NotFound);
    assert!(resp.body.is_empty());
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_get_working_directory_path_naming_directory_is_404() {
    let dir = Path::new("target").join(format!("stashd-dir-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let cfg = Config::default();

    let path = dir.to_string_lossy().to_string();
    let resp = routes::dispatch(&request(Method::Get, &path), &cfg).await;

    assert_eq!(resp.status, StatusCode::NotFound);
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_files_fetch_rejects_traversal() {
    let root = temp_root("fetch-traversal");
    let cfg = config_with_root(&root);

    let resp = routes::dispatch(&request(Method::Get, "files/../secret"), &cfg).await;

    assert_eq!(resp.status, StatusCode::NotFound);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_post_then_get_round_trip() {
    let root = temp_root("round-trip");
    let cfg = config_with_root(&root);

    let mut post = request(Method::Post, "files/test.txt");
    post.body = b"hello".to_vec();
    let created = routes::dispatch(&post, &cfg).await;

    assert_eq!(created.status, StatusCode::Created);
    assert!(created.headers.is_empty());
    assert!(created.body.is_empty());

    let fetched = routes::dispatch(&request(Method::Get, "files/test.txt"), &cfg).await;
    assert_eq!(fetched.status, StatusCode::Ok);
    assert_eq!(fetched.body, b"hello".to_vec());
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_post_outside_files_is_501() {
    let cfg = Config::default();
    let mut req = request(Method::Post, "echo/abc");
    req.body = b"ignored".to_vec();

    let resp = routes::dispatch(&req, &cfg).await;

    assert_eq!(resp.status, StatusCode::NotImplemented);
}

#[tokio::test]
async fn test_post_with_traversal_name_is_500() {
    let root = temp_root("post-traversal");
    let cfg = config_with_root(&root);

    let mut req = request(Method::Post, "files/../escape.txt");
    req.body = b"x".to_vec();
    let resp = routes::dispatch(&req, &cfg).await;

    assert_eq!(resp.status, StatusCode::InternalServerError);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_other_methods_are_501() {
    let cfg = Config::default();

    for method in ["HEAD", "PUT", "DELETE", "OPTIONS"] {
        let req = request(Method::Other(method.to_string()), "");
        let resp = routes::dispatch(&req, &cfg).await;
        assert_eq!(resp.status, StatusCode::NotImplemented);
    }
}

#[tokio::test]
async fn test_get_unknown_path_is_404() {
    let cfg = Config::default();
    let resp = routes::dispatch(&request(Method::Get, "no/such/path"), &cfg).await;

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_get_path_without_separator_is_404_even_if_file_exists() {
    // Cargo.toml exists in the working directory during tests, but a
    // separator-free path is never served.
    let cfg = Config::default();
    let resp = routes::dispatch(&request(Method::Get, "Cargo.toml"), &cfg).await;

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_get_working_directory_file_resolves_content_type() {
    // The generic route serves relative to the working directory, which is
    // the package root under cargo test; scratch space goes under target/.
    let dir = Path::new("target").join(format!("stashd-cwd-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("data.json"), b"{}\n").unwrap();
    let cfg = Config::default();

    let path = dir.join("data.json").to_string_lossy().to_string();
    let resp = routes::dispatch(&request(Method::Get, &path), &cfg).await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.header("Content-Type").unwrap(), "application/json");
    assert_eq!(resp.body, b"{}".to_vec());
    let _ = std::fs::remove_dir_all(&dir);
}
