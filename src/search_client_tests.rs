#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use crate::core::cancellation::CancellationContext;
    use crate::core::interfaces::adapters::StorySearchProvider;
    use crate::core::models::{SearchError, SearchResponse, SearchResult};
    use crate::core::services::format_search_response;
    use crate::search_settings::SearchSettings;
    use crate::HackerNewsSearchProvider;

    const SAMPLE_BODY: &str =
        r#"{"hits":[{"title":"Sample","url":"a.com","created_at":"1970-01-01T00:00:00Z"}]}"#;

    struct StubServer {
        base_url: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl StubServer {
        fn request_lines(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn read_request_line(stream: &mut TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            }
        }
        String::from_utf8_lossy(&buffer)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    }

    /// Answers every connection with the same status and body.
    async fn start_stub_server(status_line: &'static str, body: &'static str) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api/v1/search_by_date", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let request_line = read_request_line(&mut stream).await;
                recorded.lock().unwrap().push(request_line);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        StubServer { base_url, requests }
    }

    /// Accepts connections and never answers them.
    async fn start_silent_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/search", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        base_url
    }

    fn provider_for(base_url: &str, timeout_ms: u64) -> HackerNewsSearchProvider {
        HackerNewsSearchProvider::with_settings(SearchSettings {
            base_url: base_url.to_string(),
            timeout_ms,
            ..SearchSettings::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_hits_from_stub_server() {
        let server = start_stub_server("200 OK", SAMPLE_BODY).await;
        let provider = provider_for(&server.base_url, 1000);

        let response = provider
            .search(&CancellationContext::new(), "postgres")
            .await
            .unwrap();

        assert_eq!(
            response,
            SearchResponse::new(vec![SearchResult::new(
                "Sample",
                "a.com",
                chrono::DateTime::from_timestamp(0, 0).unwrap()
            )])
        );
    }

    #[tokio::test]
    async fn test_search_sends_one_get_with_escaped_query() {
        let server = start_stub_server("200 OK", SAMPLE_BODY).await;
        let provider = provider_for(&server.base_url, 1000);

        provider
            .search(&CancellationContext::new(), "postgres vacuum")
            .await
            .unwrap();

        let requests = server.request_lines();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("GET /api/v1/search_by_date?query=postgres%20vacuum&tags=story "));
    }

    #[tokio::test]
    async fn test_search_then_format_matches_chat_message() {
        let server = start_stub_server("200 OK", SAMPLE_BODY).await;
        let provider = provider_for(&server.base_url, 1000);

        let response = provider
            .search(&CancellationContext::new(), "postgres")
            .await
            .unwrap();

        assert_eq!(
            format_search_response(Some(&response)),
            "**Sample**\nLink: a.com\nPosted: Thu, Jan  1 at 00:00\n\n"
        );
    }

    #[tokio::test]
    async fn test_search_with_no_hits_is_empty_response() {
        let server = start_stub_server("200 OK", r#"{"hits":[]}"#).await;
        let provider = provider_for(&server.base_url, 1000);

        let response = provider
            .search(&CancellationContext::new(), "nothing-matches-this")
            .await
            .unwrap();

        assert!(response.is_empty());
        assert_eq!(format_search_response(Some(&response)), "");
    }

    #[tokio::test]
    async fn test_search_rejects_non_success_status() {
        let server = start_stub_server("500 Internal Server Error", r#"{"hits":[]}"#).await;
        let provider = provider_for(&server.base_url, 1000);

        let result = provider.search(&CancellationContext::new(), "postgres").await;

        match result {
            Err(SearchError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, r#"{"hits":[]}"#);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_decode_error() {
        let server = start_stub_server("200 OK", "not json at all").await;
        let provider = provider_for(&server.base_url, 1000);

        let result = provider.search(&CancellationContext::new(), "postgres").await;

        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_search_times_out_against_silent_server() {
        let base_url = start_silent_server().await;
        let provider = provider_for(&base_url, 200);

        let started = Instant::now();
        let result = provider.search(&CancellationContext::new(), "postgres").await;

        assert!(matches!(result, Err(SearchError::Timeout { .. })), "{:?}", result);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_search_honours_context_deadline() {
        let base_url = start_silent_server().await;
        let provider = provider_for(&base_url, 5000);
        let ctx = CancellationContext::with_timeout(Duration::from_millis(100));

        let started = Instant::now();
        let result = provider.search(&ctx, "postgres").await;

        assert!(matches!(result, Err(SearchError::Timeout { .. })), "{:?}", result);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_search_returns_promptly_when_cancelled() {
        let base_url = start_silent_server().await;
        let provider = provider_for(&base_url, 5000);
        let ctx = CancellationContext::new();
        let canceller = ctx.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let result = provider.search(&ctx, "postgres").await;

        assert!(matches!(result, Err(SearchError::Cancelled { .. })), "{:?}", result);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_search_with_cancelled_context_sends_no_request() {
        let server = start_stub_server("200 OK", SAMPLE_BODY).await;
        let provider = provider_for(&server.base_url, 1000);
        let ctx = CancellationContext::new();
        ctx.cancel();

        let result = provider.search(&ctx, "postgres").await;

        assert!(matches!(result, Err(SearchError::Cancelled { .. })));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(server.request_lines().is_empty());
    }

    #[tokio::test]
    async fn test_search_unreachable_endpoint_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let provider = provider_for(&format!("http://{}/search", address), 1000);

        let result = provider.search(&CancellationContext::new(), "postgres").await;

        let error = result.unwrap_err();
        assert!(error.is_transport(), "{:?}", error);
    }

    #[tokio::test]
    async fn test_concurrent_searches_share_one_provider() {
        let server = start_stub_server("200 OK", SAMPLE_BODY).await;
        let provider: Arc<dyn StorySearchProvider> = Arc::new(provider_for(&server.base_url, 1000));
        let ctx = CancellationContext::new();

        let handles: Vec<_> = ["alpha", "beta", "gamma"]
            .into_iter()
            .map(|query| {
                let provider = Arc::clone(&provider);
                let ctx = ctx.child();
                tokio::spawn(async move { provider.search(&ctx, query).await })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap().len(), 1);
        }
        assert_eq!(server.request_lines().len(), 3);
    }
}
