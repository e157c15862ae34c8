#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
use std::{process::ExitCode, time::Duration};

use argh::FromArgs;
use mcstatus_api::{BedrockClient, Client, DEFAULT_API_BASE, DEFAULT_TIMEOUT, Edition, JavaClient};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[macro_use]
extern crate tracing;

/// Look up a Minecraft server through the mcstatus.io API.
#[derive(FromArgs, Debug)]
struct Args {
    /// look up a Bedrock server instead of a Java one
    #[argh(switch)]
    bedrock: bool,
    /// make the request on a blocking thread instead of async
    #[argh(switch)]
    blocking: bool,
    /// the server address, optionally with a `:port` suffix
    #[argh(positional)]
    address: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    start_tracing();
    let args: Args = argh::from_env();
    let api_base = std::env::var("MCSTATUS_API").unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());
    let timeout = std::env::var("MCSTATUS_TIMEOUT").map_or(Ok(DEFAULT_TIMEOUT), |v| {
        v.parse::<f64>()
            .ok()
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .ok_or(v)
    });
    let timeout = match timeout {
        Ok(timeout) => timeout,
        Err(v) => {
            error!(value = %v, "MCSTATUS_TIMEOUT is not a number of seconds");
            return ExitCode::FAILURE;
        }
    };

    let result = if args.bedrock {
        let client = BedrockClient::new(args.address)
            .with_timeout(timeout)
            .with_api_base(api_base);
        lookup(client, args.blocking).await
    } else {
        let client = JavaClient::new(args.address)
            .with_timeout(timeout)
            .with_api_base(api_base);
        lookup(client, args.blocking).await
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!(%error, "Status lookup failed");
            ExitCode::FAILURE
        }
    }
}

/// Look the server up and render the result as pretty JSON.
async fn lookup<E>(client: Client<E>, blocking: bool) -> Result<String, mcstatus_api::Error>
where
    E: Edition + Send + 'static,
    E::Status: Serialize + Send + 'static,
{
    let url = client.url()?;
    info!(%url, blocking, "Looking up server");
    let status = if blocking {
        tokio::task::spawn_blocking(move || client.status())
            .await
            .expect("status lookup thread panicked")?
    } else {
        client.async_status().await?
    };
    Ok(serde_json::to_string_pretty(&status)?)
}

fn start_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(concat!(env!("CARGO_PKG_NAME"), "=info").parse().unwrap())
        .with_env_var("LOG")
        .from_env()
        .expect("failed to parse env");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["mcstatus"], args)
    }

    #[test]
    fn test_parse_java() {
        let args = parse(&["mc.hypixel.net"]).unwrap();
        assert_eq!(args.address, "mc.hypixel.net");
        assert!(!args.bedrock);
        assert!(!args.blocking);
    }
    #[test]
    fn test_parse_bedrock_blocking() {
        let args = parse(&["--blocking", "play.nethergames.org:19133", "--bedrock"]).unwrap();
        assert_eq!(args.address, "play.nethergames.org:19133");
        assert!(args.bedrock);
        assert!(args.blocking);
    }
    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a", "b"]).is_err());
        assert!(parse(&["--verbose", "a"]).is_err());
    }
}
