//! reqwest-backed [`HttpTransport`].

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Proxy};
use tracing::debug;

use super::proxy::ProxyIdentity;
use crate::error::Result;
use crate::infrastructure::config::ApiConfig;
use crate::port::{HttpRequest, HttpResponse, HttpTransport};

/// One HTTP session against the backend, optionally routed through a proxy.
///
/// The underlying client keeps its connection pool and cookies for the
/// lifetime of the transport, so warm-up cookies carry over to later calls.
pub struct ReqwestTransport {
    http: HttpClient,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a session with the configured timeouts, routed through `proxy`
    /// when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy URL is invalid or the client cannot be built.
    pub fn new(config: &ApiConfig, proxy: Option<&ProxyIdentity>) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .cookie_store(true);

        if let Some(proxy) = proxy {
            debug!(proxy = %proxy, "Routing requests through proxy");
            builder = builder.proxy(Proxy::all(proxy.url()?)?);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let response = self
            .http
            .get(&url)
            .query(&request.query)
            .headers(request.headers.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(url = %url, status, bytes = body.len(), "GET");
        Ok(HttpResponse { status, body })
    }
}
