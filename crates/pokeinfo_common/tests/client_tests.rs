//! PokeAPI client against a local canned HTTP server
//!
//! Tests for:
//! - request path normalization
//! - 200 decoding
//! - non-200 and malformed-body failures

use pokeinfo_common::{FetchError, PokeApiClient, PokemonSource};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PIKACHU: &str = r#"{"name":"pikachu","height":4,"weight":60,
"types":[{"slot":1,"type":{"name":"electric","url":"https://pokeapi.co/api/v2/type/13/"}}],
"stats":[{"base_stat":35},{"base_stat":55},{"base_stat":40},{"base_stat":50},{"base_stat":50},{"base_stat":90}]}"#;

/// Serves one canned response per connection and records request lines
struct CannedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

async fn serve(status_line: &'static str, body: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }

            let request = String::from_utf8_lossy(&buf);
            if let Some(line) = request.lines().next() {
                seen.lock().unwrap().push(line.to_string());
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    CannedServer {
        base_url: format!("http://{}/api/v2/pokemon", addr),
        requests,
    }
}

#[tokio::test]
async fn test_request_path_is_trimmed_and_lowercased() {
    let server = serve("200 OK", PIKACHU).await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    client.fetch("  PIKACHU ").await.unwrap();

    let requests = server.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], "GET /api/v2/pokemon/pikachu HTTP/1.1");
}

#[tokio::test]
async fn test_reserved_characters_stay_in_one_segment() {
    let server = serve("404 Not Found", "Not Found").await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    for raw in ["../type/13", "Mr Mime?x", "#"] {
        let _ = client.fetch(raw).await;
    }

    let requests = server.requests.lock().unwrap();
    assert_eq!(
        *requests,
        vec![
            "GET /api/v2/pokemon/..%2Ftype%2F13 HTTP/1.1".to_string(),
            "GET /api/v2/pokemon/mr%20mime%3Fx HTTP/1.1".to_string(),
            "GET /api/v2/pokemon/%23 HTTP/1.1".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_dot_segment_sends_nothing() {
    let server = serve("200 OK", PIKACHU).await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    assert_eq!(client.fetch("..").await, Err(FetchError::InvalidQuery));
    assert!(server.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_success_decodes_record() {
    let server = serve("200 OK", PIKACHU).await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    let record = client.fetch("pikachu").await.unwrap();
    assert_eq!(record.types, vec!["electric"]);
    assert_eq!(record.stats, [35, 55, 40, 50, 50, 90]);
    assert_eq!(record.height, 4);
    assert_eq!(record.weight, 60);
}

#[tokio::test]
async fn test_whitespace_input_sends_nothing() {
    let server = serve("200 OK", PIKACHU).await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    assert_eq!(client.fetch(" \t ").await, Err(FetchError::InvalidQuery));
    assert!(server.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_404_is_not_found_with_reason() {
    let server = serve("404 Not Found", "Not Found").await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    let err = client.fetch("missingno").await.unwrap_err();
    assert_eq!(
        err,
        FetchError::NotFound {
            status: 404,
            reason: "Not Found".to_string()
        }
    );
}

#[tokio::test]
async fn test_server_error_is_not_found() {
    let server = serve("503 Service Unavailable", "").await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    let err = client.fetch("pikachu").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_malformed_body_on_200() {
    let server = serve("200 OK", "<html>maintenance</html>").await;
    let client = PokeApiClient::new(server.base_url.clone()).unwrap();

    let err = client.fetch("pikachu").await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PokeApiClient::new(format!("http://{}/pokemon", addr)).unwrap();
    let err = client.fetch("pikachu").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
}
