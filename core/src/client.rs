//! Transport abstraction and the ureq-backed implementation.
//!
//! # Design
//! `HttpClient` is the seam between the loader and the network. It takes an
//! endpoint descriptor and a completion, performs one request, and calls the
//! completion exactly once with either the raw response or an opaque
//! `TransportError`. It does not look at status codes or bodies.
//!
//! `UreqHttpClient` runs the blocking ureq call on tokio's blocking pool, so
//! the completion always runs on another thread after `get` has returned. The
//! completion rides in a `PendingCompletion` guard: if the runtime refuses or
//! drops the job, the guard still reports a `TransportError`.

use std::thread;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::{debug, warn};
use ureq::Agent;

use crate::endpoint::{TmdbApi, DEFAULT_BASE_URL};
use crate::error::TransportError;
use crate::http::{HttpClientResult, HttpMethod, HttpRequest, HttpResponse};

/// Completion handed to `HttpClient::get`.
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Performs one network request per call.
pub trait HttpClient: Send + Sync {
    fn get(&self, api: &TmdbApi, completion: HttpCompletion);
}

/// Completion that fires exactly once, even when its job is dropped unrun.
struct PendingCompletion(Option<HttpCompletion>);

impl PendingCompletion {
    fn new(completion: HttpCompletion) -> Self {
        Self(Some(completion))
    }

    fn complete(mut self, result: HttpClientResult) {
        if let Some(completion) = self.0.take() {
            completion(result);
        }
    }
}

impl Drop for PendingCompletion {
    fn drop(&mut self) {
        let Some(completion) = self.0.take() else {
            return;
        };
        warn!("feed request dropped before it ran");
        // The drop may happen inside `get` when the runtime is shut down, so
        // deliver from a fresh thread.
        thread::spawn(move || completion(Err(TransportError::new("request dropped"))));
    }
}

/// Settings for `UreqHttpClient`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("feed-core/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// `HttpClient` backed by a blocking ureq agent.
#[derive(Clone)]
pub struct UreqHttpClient {
    agent: Agent,
    config: TransportConfig,
    runtime: Handle,
}

impl UreqHttpClient {
    /// Client for `base_url` with default timeout, running on the current
    /// tokio runtime. Fails when called outside a runtime.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let runtime = Handle::try_current().map_err(|e| TransportError::new(e.to_string()))?;
        let config = TransportConfig {
            base_url: base_url.to_string(),
            ..TransportConfig::default()
        };
        Ok(Self::with_config(config, runtime))
    }

    pub fn with_config(config: TransportConfig, runtime: Handle) -> Self {
        // Status codes are data for the mapper, not transport failures.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Self {
            agent,
            config,
            runtime,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl HttpClient for UreqHttpClient {
    fn get(&self, api: &TmdbApi, completion: HttpCompletion) {
        let request = api.build_request(&self.config.base_url);
        let agent = self.agent.clone();
        let user_agent = self.config.user_agent.clone();
        let pending = PendingCompletion::new(completion);
        self.runtime.spawn_blocking(move || {
            let result = request.and_then(|req| execute(&agent, &req, &user_agent));
            if let Err(e) = &result {
                warn!(error = %e, "feed request failed");
            }
            pending.complete(result);
        });
    }
}

/// Execute `request` and collect the full body.
fn execute(agent: &Agent, request: &HttpRequest, user_agent: &str) -> HttpClientResult {
    debug!(method = request.method.as_str(), url = %request.url, "sending request");

    let mut builder = match request.method {
        HttpMethod::Get => agent.get(request.url.as_str()),
    };
    builder = builder.header("user-agent", user_agent);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.call()?;
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response.body_mut().read_to_vec()?;

    debug!(status, bytes = body.len(), "response received");
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
