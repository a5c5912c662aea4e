//! The structure used to authenticate with the provider. The public
//! provider answers anonymous requests, the key only lifts the rate
//! limit.

/// An API key for the provider, sent as the `key` query parameter
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    key: String,
}

impl Credentials {
    /// Creates credentials based on the `IPGEO_API_KEY` environment
    /// variable
    ///
    /// When the variable is not set, `None` is returned and the client
    /// runs anonymously.
    ///
    /// ```rust
    /// use ipgeo::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses an api key"),
    ///     None => println!("anonymous access"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("IPGEO_API_KEY").ok().map(Self::api_key)
    }

    pub fn api_key<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }
}
