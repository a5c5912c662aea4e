/// The base url of the provider to query
///
/// Defaults to the public ipapi.co endpoint. Any server answering with
/// the same shape can be used instead, which is how the tests point
/// the client at a local mock.
#[derive(Clone, Debug)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self(base_url.into())
    }

    pub fn base_url(&self) -> &str {
        self.0.as_str()
    }

    pub fn from_env() -> Option<Self> {
        std::env::var("IPGEO_BASE_URL").ok().map(Self::new)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new("https://ipapi.co")
    }
}
