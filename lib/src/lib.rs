pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod ip;
pub mod prelude;
pub mod record;
mod request;

pub use client::{Client, ClientBuilder};
pub use credentials::Credentials;
pub use endpoint::Endpoint;
pub use error::Error;
