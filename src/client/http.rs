//! HTTP client implementation for the Scryfall API.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::api::{
    BulkDataService, CardsService, CatalogsService, RulingsService, SetsService,
    SymbologyService,
};
use crate::error::ApiError;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::context::RequestContext;
use super::envelope::ListEnvelope;
use super::rate_limit::RateLimiter;

/// The main client for interacting with the Scryfall API.
///
/// The client is immutable once built and cheap to clone; clones share the
/// transport and the rate limiter, so every request made through any clone
/// counts against the same quota.
///
/// # Example
///
/// ```no_run
/// use scryfall_rs::ScryfallClient;
///
/// # async fn example() -> scryfall_rs::Result<()> {
/// let client = ScryfallClient::new()?;
///
/// let card = client.cards().named_exact("Lightning Bolt").await?;
/// println!("{} costs {}", card.name, card.mana_cost.unwrap_or_default());
///
/// let sets = client.sets().list().await?;
/// println!("{} sets", sets.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ScryfallClient {
    pub(crate) inner: Arc<ClientInner>,
    pub(crate) context: RequestContext,
}

/// Authorization credential attached as a bearer token.
#[derive(Clone)]
pub enum Credential {
    /// Application client secret
    ClientSecret(SecretString),
    /// Grant secret issued to an end user
    GrantSecret(SecretString),
}

impl Credential {
    fn secret(&self) -> &SecretString {
        match self {
            Credential::ClientSecret(s) | Credential::GrantSecret(s) => s,
        }
    }

    fn header_value(&self) -> Result<HeaderValue> {
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", self.secret().expose_secret()))
                .map_err(|_| Error::Config("secret is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ClientSecret(_) => f.write_str("ClientSecret([REDACTED])"),
            Credential::GrantSecret(_) => f.write_str("GrantSecret([REDACTED])"),
        }
    }
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_uri: Url,
    pub(crate) user_agent: HeaderValue,
    pub(crate) credential: Option<Credential>,
    authorization: Option<HeaderValue>,
    pub(crate) limiter: Option<Arc<dyn RateLimiter>>,
}

impl ScryfallClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when both a client secret and a grant secret
    /// are set, when the base URI is not an absolute URL, when the rate
    /// quota is not positive, or when the transport cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let non_empty = |s: Option<SecretString>| s.filter(|s| !s.expose_secret().is_empty());
        let credential = match (
            non_empty(config.client_secret),
            non_empty(config.grant_secret),
        ) {
            (Some(_), Some(_)) => {
                return Err(Error::Config("multiple secrets configured".to_string()))
            }
            (Some(secret), None) => Some(Credential::ClientSecret(secret)),
            (None, Some(secret)) => Some(Credential::GrantSecret(secret)),
            (None, None) => None,
        };
        let authorization = credential.as_ref().map(Credential::header_value).transpose()?;

        let base_uri = Url::parse(&config.base_uri).map_err(|e| {
            Error::Config(format!("invalid base URI {:?}: {}", config.base_uri, e))
        })?;
        if base_uri.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URI {:?} cannot be used as a base",
                config.base_uri
            )));
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| Error::Config(format!("invalid user agent {:?}", config.user_agent)))?;

        let limiter = config.rate_limit.into_limiter()?;

        let http = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?,
        };

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_uri,
                user_agent,
                credential,
                authorization,
                limiter,
            }),
            context: RequestContext::default(),
        })
    }

    /// Return a clone of this client whose calls run under `context`.
    ///
    /// The clone shares the transport and rate limiter with `self`.
    pub fn with_context(&self, context: RequestContext) -> Self {
        Self {
            inner: self.inner.clone(),
            context,
        }
    }

    /// The request context calls made through this client use.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// The base URI endpoint paths are resolved against.
    pub fn base_uri(&self) -> &Url {
        &self.inner.base_uri
    }

    /// The configured credential, if any.
    pub fn credential(&self) -> Option<&Credential> {
        self.inner.credential.as_ref()
    }

    /// Get the cards service.
    pub fn cards(&self) -> CardsService {
        CardsService::new(self.inner.clone(), self.context.clone())
    }

    /// Get the sets service.
    pub fn sets(&self) -> SetsService {
        SetsService::new(self.inner.clone(), self.context.clone())
    }

    /// Get the bulk data service.
    pub fn bulk_data(&self) -> BulkDataService {
        BulkDataService::new(self.inner.clone(), self.context.clone())
    }

    /// Get the catalogs service.
    pub fn catalogs(&self) -> CatalogsService {
        CatalogsService::new(self.inner.clone(), self.context.clone())
    }

    /// Get the rulings service.
    pub fn rulings(&self) -> RulingsService {
        RulingsService::new(self.inner.clone(), self.context.clone())
    }

    /// Get the card symbology service.
    pub fn symbology(&self) -> SymbologyService {
        SymbologyService::new(self.inner.clone(), self.context.clone())
    }

    /// GET `path` (relative to the base URI) and decode the body as `T`.
    ///
    /// Useful for endpoints without a dedicated service method.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.inner.get(&self.context, path).await
    }

    /// POST `body` as JSON to `path` and decode the response as `T`.
    ///
    /// `None` sends a request without a body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        self.inner.post(&self.context, path, body).await
    }

    /// GET a list endpoint and return the `data` array of its envelope.
    pub async fn list_get<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.inner.list_get(&self.context, path).await
    }
}

impl ClientInner {
    /// Resolve an endpoint path against the base URI.
    pub(crate) fn resolve(&self, path: &str) -> Result<Url> {
        self.base_uri
            .join(path)
            .map_err(|e| Error::Config(format!("cannot resolve endpoint {:?}: {}", path, e)))
    }

    /// Build a request with the standard headers.
    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Request> {
        let url = self.resolve(path)?;
        // Credentials only go to the configured origin; absolute paths such
        // as a `next_page` URI may point elsewhere.
        let authorization = match self.authorization {
            Some(ref value) if url.origin() == self.base_uri.origin() => Some(value.clone()),
            Some(_) => {
                tracing::debug!(%url, "omitting credential for foreign origin");
                None
            }
            None => None,
        };
        let mut request = reqwest::Request::new(method, url);

        let headers = request.headers_mut();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(authorization) = authorization {
            headers.insert(AUTHORIZATION, authorization);
        }

        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<T> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(ctx, request).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| Error::Config(format!("cannot serialize request body: {}", e)))?;
        let request = self.build_request(Method::POST, path, body)?;
        self.execute(ctx, request).await
    }

    /// GET a list endpoint and unwrap its envelope.
    pub(crate) async fn list_get<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<Vec<T>> {
        let envelope: ListEnvelope = self.get(ctx, path).await?;
        envelope.into_items()
    }

    /// Wait for a permit, send the request, and decode the response.
    async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: reqwest::Request,
    ) -> Result<T> {
        let (status, body) = ctx.run(self.dispatch(request)).await?;
        decode_response(status, &body)
    }

    async fn dispatch(&self, request: reqwest::Request) -> Result<(StatusCode, Vec<u8>)> {
        if let Some(ref limiter) = self.limiter {
            limiter.acquire().await;
        }

        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "dispatching request");
        let started = std::time::Instant::now();

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
        Ok((status, body.to_vec()))
    }
}

/// Decode a completed response.
///
/// A 200 body is decoded as `T`; any other status is decoded as an
/// [`ApiError`] and returned as the call's failure.
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status == StatusCode::OK {
        return serde_json::from_slice(body).map_err(Error::Decode);
    }

    match serde_json::from_slice::<ApiError>(body) {
        Ok(err) => {
            tracing::warn!(
                status = status.as_u16(),
                code = %err.code,
                details = %err.details,
                "API returned an error"
            );
            Err(Error::Api(err))
        }
        Err(source) => Err(Error::MalformedErrorBody {
            status: status.as_u16(),
            source,
        }),
    }
}

impl fmt::Debug for ScryfallClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScryfallClient")
            .field("base_uri", &self.inner.base_uri.as_str())
            .field("user_agent", &self.inner.user_agent)
            .field("credential", &self.inner.credential)
            .field("rate_limited", &self.inner.limiter.is_some())
            .field("context", &self.context)
            .finish()
    }
}
