//! Resources needed to look up the metadata attached to an address

use std::net::IpAddr;

use crate::client::Client;
use crate::error::Error;
use crate::prelude::HttpCommand;
use crate::record::IpRecord;

/// Command to fetch the location and network metadata the provider
/// holds for an address
///
/// Executing this command will return an [`IpRecord`](crate::record::IpRecord) on success.
///
/// # Example using the [`Client`](crate::client::Client)
///
/// ```rust,no_run
/// use ipgeo::client::ClientBuilder;
/// use ipgeo::ip::lookup::IpLookupCommand;
/// use ipgeo::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = ClientBuilder::from_env().build().unwrap();
/// let cmd = IpLookupCommand::new("8.8.8.8".parse().unwrap());
/// match cmd.execute(&client).await {
///     Ok(record) => println!("{} is in {:?}", record.ip, record.country),
///     Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct IpLookupCommand {
    pub target: Option<IpAddr>,
}

impl IpLookupCommand {
    pub fn new(target: IpAddr) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Asks the provider for the address it sees the request coming
    /// from
    pub fn own() -> Self {
        Self { target: None }
    }

    fn to_path(&self) -> String {
        match self.target {
            Some(addr) => format!("{addr}/json"),
            None => "json".into(),
        }
    }
}

#[async_trait::async_trait]
impl HttpCommand for IpLookupCommand {
    type Output = IpRecord;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        client.get_request(&self.to_path()).await
    }
}
