use std::{marker::PhantomData, time::Duration};

use crate::{
    Bedrock, DEFAULT_API_BASE, DEFAULT_TIMEOUT, Edition, Error, Java, address, fetch,
};

/// Looks up Java servers.
pub type JavaClient = Client<Java>;
/// Looks up Bedrock servers.
pub type BedrockClient = Client<Bedrock>;

/// Configuration for looking up a server of edition `E`.
///
/// A client is plain configuration: it holds no connection and can be cloned
/// or shared across tasks freely. Every lookup makes exactly one request.
///
/// # Examples
///
/// ```no_run
/// # async {
/// use std::time::Duration;
///
/// use mcstatus_api::{BedrockClient, BedrockStatus};
///
/// let client = BedrockClient::new("play.nethergames.org")
///     .with_timeout(Duration::from_secs(10));
/// if let BedrockStatus::Online(server) = client.async_status().await? {
///     println!("{:?} players online", server.players.online);
/// }
/// # Ok::<(), mcstatus_api::Error>(())
/// # };
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Client<E> {
    /// The server address.
    ///
    /// This can be either an IP or a hostname, and both may optionally have a
    /// port at the end.
    ///
    /// # Examples
    ///
    /// ```text
    /// test.server.com
    /// test.server.com:19384
    /// 13.212.76.209
    /// 13.212.76.209:23193
    /// ```
    host: String,
    /// Used when `host` carries no port.
    port: u16,
    timeout: Duration,
    api_base: String,
    edition: PhantomData<E>,
}

impl<E: Edition> Client<E> {
    /// A client for `host` with the edition's default port and a five second timeout.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: E::DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            api_base: DEFAULT_API_BASE.to_owned(),
            edition: PhantomData,
        }
    }

    /// Replace the port used when the address does not carry one.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replace the deadline for the whole request.
    ///
    /// The same value is forwarded to the API as its own ping timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Talk to a different status API, e.g. a self-hosted mirror.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// The deadline for each lookup.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The host and port that will be looked up.
    ///
    /// # Errors
    /// If the address carries a port that is not a number.
    pub fn target(&self) -> Result<(String, u16), Error> {
        address::resolve_target(&self.host, self.port)
    }

    /// The status API URL for this server, without the query string.
    ///
    /// # Errors
    /// If the address carries a port that is not a number.
    pub fn url(&self) -> Result<String, Error> {
        let (host, port) = self.target()?;
        Ok(format!(
            "{}/status/{}/{host}:{port}",
            self.api_base.trim_end_matches('/'),
            E::PATH
        ))
    }

    /// Retrieve the server status, blocking the current thread.
    ///
    /// This must not be called from within an async runtime; use
    /// [`Client::async_status`] there.
    ///
    /// # Errors
    /// If the request fails, times out, is answered with a non-success
    /// status, or the response is not a status document.
    pub fn status(&self) -> Result<E::Status, Error> {
        let document = fetch::fetch_blocking(&self.url()?, self.timeout)?;
        E::project(document)
    }

    /// Retrieve the server status asynchronously.
    ///
    /// Dropping the returned future cancels the request.
    ///
    /// # Errors
    /// If the request fails, times out, is answered with a non-success
    /// status, or the response is not a status document.
    pub async fn async_status(&self) -> Result<E::Status, Error> {
        let document = fetch::fetch(&self.url()?, self.timeout).await?;
        E::project(document)
    }
}
