use std::future::Future;
use std::pin::pin;

use futures_util::future::{Either, select};
use game2048_core::{
    Direction, Endpoint, GameResponse, GameService, Method, ServiceError, Suggestion,
};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

/// [`GameService`] backed by `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpService {
    base_url: String,
    timeout_ms: u32,
    suggest_timeout_ms: u32,
}

impl HttpService {
    pub(crate) fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
            suggest_timeout_ms: timeout_ms,
        }
    }

    /// Suggestions wait on a language model and get their own limit.
    pub(crate) fn with_suggest_timeout(mut self, timeout_ms: u32) -> Self {
        self.suggest_timeout_ms = timeout_ms;
        self
    }

    fn timeout_for(&self, endpoint: Endpoint) -> u32 {
        match endpoint {
            Endpoint::Suggest(_) => self.suggest_timeout_ms,
            Endpoint::Restart | Endpoint::Move(_) => self.timeout_ms,
        }
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ServiceError> {
        let method = endpoint.method();
        let url = endpoint.url(&self.base_url);
        log::debug!("{} {}", method.as_str(), url);

        let result = with_timeout(fetch_json(method, &url), self.timeout_for(endpoint)).await;
        if let Err(err) = &result {
            log::warn!("{} {}: {}", method.as_str(), url, err);
        }
        result
    }
}

impl GameService for HttpService {
    fn restart(&self) -> impl Future<Output = Result<GameResponse, ServiceError>> {
        self.call(Endpoint::Restart)
    }

    fn make_move(
        &self,
        direction: Direction,
    ) -> impl Future<Output = Result<GameResponse, ServiceError>> {
        self.call(Endpoint::Move(direction))
    }

    fn suggest(&self, depth: u32) -> impl Future<Output = Result<Suggestion, ServiceError>> {
        self.call(Endpoint::Suggest(depth))
    }
}

async fn fetch_json<T: DeserializeOwned>(method: Method, url: &str) -> Result<T, ServiceError> {
    let request = match method {
        Method::Patch => Request::patch(url),
        Method::Post => Request::post(url),
    };
    let response = request
        .send()
        .await
        .map_err(|err| ServiceError::Transport(err.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::Status {
            status: response.status(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ServiceError::Decode(err.to_string()))
}

/// Races `future` against a timer. `0` disables the limit.
pub(crate) async fn with_timeout<T>(
    future: impl Future<Output = Result<T, ServiceError>>,
    timeout_ms: u32,
) -> Result<T, ServiceError> {
    if timeout_ms == 0 {
        return future.await;
    }

    match select(pin!(future), pin!(TimeoutFuture::new(timeout_ms))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ServiceError::Timeout(timeout_ms)),
    }
}
