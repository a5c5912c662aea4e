use crate::client::Client;
use crate::error::Error;

#[async_trait::async_trait]
pub trait HttpCommand {
    type Output;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error>;
}
