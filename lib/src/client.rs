//! The client implementing the provider's HTTP JSON protocol

use std::time::Duration;

use crate::credentials::Credentials;
use crate::endpoint::Endpoint;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// The default timeout applied to every request, the provider call is
/// the only suspension point and has to stay bounded
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The errors when generating a [`Client`](Client) from a [`ClientBuilder`](ClientBuilder)
#[derive(Debug, thiserror::Error)]
pub enum ClientBuilderError {
    #[error("unable to build the http client")]
    Reqwest(#[source] reqwest::Error),
}

/// A builder for the [`Client`](Client) structure
///
/// ```
/// use ipgeo::client::ClientBuilder;
/// use ipgeo::credentials::Credentials;
/// use ipgeo::endpoint::Endpoint;
///
/// let _client = ClientBuilder::default()
///     .with_credentials(Credentials::api_key("my-key"))
///     .with_endpoint(Endpoint::default())
///     .build()
///     .expect("unable to build http client");
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    pub client_builder: reqwest::ClientBuilder,
    pub credentials: Option<Credentials>,
    pub endpoint: Option<Endpoint>,
    pub timeout: Option<Duration>,
}

fn timeout_from_env() -> Option<Duration> {
    let value = std::env::var("IPGEO_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("invalid value for IPGEO_TIMEOUT, ignoring it: {err}");
            None
        }
    }
}

impl ClientBuilder {
    /// Builds a client builder from the environment variables. See
    /// [`Credentials`](crate::credentials::Credentials) and
    /// [`Endpoint`](crate::endpoint::Endpoint).
    ///
    /// The timeout value is read from the `IPGEO_TIMEOUT` environment
    /// variable, in milliseconds.
    pub fn from_env() -> Self {
        Self {
            client_builder: reqwest::ClientBuilder::default(),
            credentials: Credentials::from_env(),
            endpoint: Endpoint::from_env(),
            timeout: timeout_from_env(),
        }
    }

    pub fn set_client_builder(&mut self, value: reqwest::ClientBuilder) {
        self.client_builder = value;
    }

    pub fn with_client_builder(mut self, value: reqwest::ClientBuilder) -> Self {
        self.client_builder = value;
        self
    }

    pub fn set_credentials(&mut self, value: Credentials) {
        self.credentials = Some(value);
    }

    pub fn with_credentials(mut self, value: Credentials) -> Self {
        self.credentials = Some(value);
        self
    }

    pub fn set_endpoint(&mut self, value: Endpoint) {
        self.endpoint = Some(value);
    }

    pub fn with_endpoint(mut self, value: Endpoint) -> Self {
        self.endpoint = Some(value);
        self
    }

    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Some(value);
    }

    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    /// Builds a client for the provider
    ///
    /// # Errors
    ///
    /// Returns `Err(ClientBuilderError::Reqwest)` when the reqwest client cannot be built.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        Ok(Client {
            inner: self
                .client_builder
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .map_err(ClientBuilderError::Reqwest)?,
            credentials: self.credentials,
            endpoint: self.endpoint.unwrap_or_default(),
        })
    }
}

/// Client for the provider's REST API
///
/// ```rust,no_run
/// use ipgeo::client::ClientBuilder;
/// use ipgeo::ip::lookup::IpLookupCommand;
/// use ipgeo::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = ClientBuilder::from_env()
///     .build()
///     .expect("unable to build http client");
/// let record = IpLookupCommand::own()
///     .execute(&client)
///     .await
///     .expect("unable to execute command");
/// println!("{}", record.ip);
/// # })
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: reqwest::Client,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) endpoint: Endpoint,
}
