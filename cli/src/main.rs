use std::net::IpAddr;

use clap::Parser;
use ipgeo::ip::lookup::IpLookupCommand;
use ipgeo::prelude::HttpCommand;

/// Looks up the location and network metadata attached to an address
#[derive(Debug, Parser)]
#[command(version, about)]
struct Command {
    /// Address to look up, defaults to the address the provider sees
    ip: Option<IpAddr>,
}

impl Command {
    fn to_lookup(&self) -> IpLookupCommand {
        match self.ip {
            Some(addr) => IpLookupCommand::new(addr),
            None => IpLookupCommand::own(),
        }
    }

    async fn execute(&self, client: ipgeo::Client) {
        match self.to_lookup().execute(&client).await {
            Ok(record) => {
                let output = serde_json::to_string_pretty(&record)
                    .expect("unable to serialize the record");
                println!("{output}");
            }
            Err(err) => {
                tracing::error!("lookup failed: {err}");
                eprintln!("{err}");
                std::process::exit(exitcode::UNAVAILABLE);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cmd = Command::parse();
    let client = ipgeo::ClientBuilder::from_env()
        .build()
        .expect("unable to build the provider client");
    cmd.execute(client).await;
}
