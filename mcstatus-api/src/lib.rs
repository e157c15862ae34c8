#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! `mcstatus-api` is a Rust crate for looking up the status of Minecraft
//! servers through the [mcstatus.io](https://mcstatus.io) HTTP API. It never
//! speaks the Minecraft protocol itself; the remote service does the pinging
//! and this crate turns its JSON documents into typed results.
//!
//! Both Java and Bedrock servers are supported, and every lookup can be made
//! either blocking ([`Client::status`]) or async ([`Client::async_status`]).
//!
//! ```no_run
//! use mcstatus_api::{JavaClient, JavaStatus};
//!
//! let status = JavaClient::new("mc.hypixel.net").status()?;
//! match status {
//!     JavaStatus::Online(server) => {
//!         println!("{}/{} players", server.players.online, server.players.max);
//!     }
//!     JavaStatus::Offline(_) => println!("offline"),
//! }
//! # Ok::<(), mcstatus_api::Error>(())
//! ```

mod address;
mod bedrock;
mod client;
mod common;
mod fetch;
mod java;

use std::time::Duration;

pub use address::resolve_target;
pub use bedrock::{
    Bedrock, BedrockEdition, BedrockOffline, BedrockOnline, BedrockPlayers, BedrockStatus,
    BedrockVersion,
};
pub use client::{BedrockClient, Client, JavaClient};
pub use common::Motd;
pub use java::{
    Java, JavaOffline, JavaOnline, JavaPlayers, JavaStatus, JavaVersion, Mod, Player, Plugin, Srv,
    VersionName,
};

/// The versioned mcstatus.io API every client talks to unless told otherwise.
pub const DEFAULT_API_BASE: &str = "https://api.mcstatus.io/v2";

/// How long a lookup may take, end to end, before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur when looking up a server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the status request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("could not reach the status API: {0}")]
    Connection(#[source] reqwest::Error),
    #[error("the status API responded with HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("the status API sent a malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("an invalid address was provided")]
    InvalidAddress,
}

/// A Minecraft edition the status API knows how to look up.
///
/// This carries everything that differs between editions, so a single
/// [`Client`] can serve both.
pub trait Edition {
    /// Path segment used by the API for this edition (`/status/{PATH}/...`).
    const PATH: &'static str;
    /// Port used when the address does not carry one.
    const DEFAULT_PORT: u16;

    /// The online-or-offline result for this edition.
    type Status;

    /// Turn a raw status document into a typed result.
    ///
    /// # Errors
    /// If the document is missing its `online` discriminant, or a field the
    /// selected variant requires.
    fn project(document: serde_json::Value) -> Result<Self::Status, Error>;
}
