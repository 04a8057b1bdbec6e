//! HTTP client abstraction for testability
//!
//! The browser implementation uses `gloo-net`, whose futures are not `Send`,
//! so the trait drops the `Send` bound on wasm targets only. Native builds
//! keep the bound and get a `mockall` mock for tests.

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP client for dependency injection
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;

    /// Send a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &serde_json::Value)
        -> crate::Result<HttpResponse>;
}

/// Production HTTP client backed by the browser fetch API
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct GlooHttpClient;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let response = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| crate::DashboardError::Http(format!("Encoding request body: {}", e)))?
            .send()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Stand-in client for builds without a fetch transport. Every request fails;
/// the components surface the failure through their normal error states.
#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
#[derive(Debug, Default)]
pub struct NullHttpClient;

#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl HttpClient for NullHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        Err(crate::DashboardError::Http(format!(
            "GET {}: no HTTP transport in this build",
            url
        )))
    }

    async fn post_json(
        &self,
        url: &str,
        _body: &serde_json::Value,
    ) -> crate::Result<HttpResponse> {
        Err(crate::DashboardError::Http(format!(
            "POST {}: no HTTP transport in this build",
            url
        )))
    }
}

/// The HTTP client the composition root wires in at startup
pub fn default_http_client() -> std::sync::Arc<dyn HttpClient> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        std::sync::Arc::new(GlooHttpClient)
    }
    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        std::sync::Arc::new(NullHttpClient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_2xx() {
        assert!(HttpResponse {
            status: 200,
            body: String::new()
        }
        .is_success());
        assert!(HttpResponse {
            status: 204,
            body: String::new()
        }
        .is_success());
        assert!(!HttpResponse {
            status: 404,
            body: String::new()
        }
        .is_success());
        assert!(!HttpResponse {
            status: 500,
            body: String::new()
        }
        .is_success());
    }

    #[tokio::test]
    async fn null_client_fails_every_request() {
        let client = NullHttpClient;
        let err = client.get("http://example.com/x").await.unwrap_err();
        assert!(err.to_string().contains("no HTTP transport"));

        let err = client
            .post_json("http://example.com/x", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no HTTP transport"));
    }
}
