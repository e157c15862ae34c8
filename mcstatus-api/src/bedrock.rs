//! Bedrock Edition status documents.
//! [API reference](https://mcstatus.io/docs#bedrock-status)

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    Edition, Error,
    common::{self, Motd},
};

/// Selects the Bedrock Edition API endpoints.
///
/// # Examples
///
/// ```
/// use mcstatus_api::{Bedrock, Client};
///
/// let client = Client::<Bedrock>::new("play.nethergames.org:19133");
/// assert_eq!(client.target().unwrap(), ("play.nethergames.org".to_string(), 19133));
/// ```
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Bedrock;

impl Edition for Bedrock {
    const PATH: &'static str = "bedrock";
    const DEFAULT_PORT: u16 = 19132;

    type Status = BedrockStatus;

    fn project(mut document: Value) -> Result<BedrockStatus, Error> {
        common::rename_legacy(&mut document, "expiries_at", "expires_at");
        let status = if common::discriminant(&document)? {
            BedrockStatus::Online(serde_json::from_value(document)?)
        } else {
            BedrockStatus::Offline(serde_json::from_value(document)?)
        };
        Ok(status)
    }
}

/// The result of looking up a Bedrock server.
///
/// Serializes with its `online` flag, like the document it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BedrockStatus {
    Online(BedrockOnline),
    Offline(BedrockOffline),
}

impl Serialize for BedrockStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Online(status) => common::Discriminated {
                online: true,
                status,
            }
            .serialize(serializer),
            Self::Offline(status) => common::Discriminated {
                online: false,
                status,
            }
            .serialize(serializer),
        }
    }
}

impl BedrockStatus {
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }

    /// The port that was looked up.
    #[must_use]
    pub const fn port(&self) -> u16 {
        match self {
            Self::Online(server) => server.port,
            Self::Offline(server) => server.port,
        }
    }

    #[must_use]
    pub fn ip_address(&self) -> Option<&str> {
        match self {
            Self::Online(server) => server.ip_address.as_deref(),
            Self::Offline(server) => server.ip_address.as_deref(),
        }
    }
}

/// Represents the edition of a bedrock server.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BedrockEdition {
    #[serde(rename = "MCPE")]
    PocketEdition,
    #[serde(rename = "MCEE")]
    EducationEdition,
}

impl std::fmt::Display for BedrockEdition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PocketEdition => f.write_str("MCPE"),
            Self::EducationEdition => f.write_str("MCEE"),
        }
    }
}

/// An online Bedrock server.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct BedrockOnline {
    pub port: u16,
    /// The key must be present in the document, but may be null.
    #[serde(deserialize_with = "common::required")]
    pub ip_address: Option<String>,
    pub eula_blocked: Option<bool>,
    pub retrieved_at: Option<i64>,
    pub expires_at: Option<i64>,
    pub version: BedrockVersion,
    pub players: BedrockPlayers,
    pub motd: Motd,
    /// The game mode the server defaults new users to (e.g. "Survival").
    pub gamemode: Option<String>,
    pub server_id: Option<String>,
    pub edition: Option<BedrockEdition>,
}

/// An offline Bedrock server.
///
/// Unlike [`JavaOffline`](crate::JavaOffline), the metadata here falls back
/// to `false`/`0` when the API leaves it out.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct BedrockOffline {
    pub port: u16,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default, deserialize_with = "common::or_default")]
    pub eula_blocked: bool,
    #[serde(default, deserialize_with = "common::or_default")]
    pub retrieved_at: i64,
    #[serde(default, deserialize_with = "common::or_default")]
    pub expires_at: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BedrockVersion {
    /// The name of the servers version (ex: 1.16.200).
    pub name: Option<String>,
    /// The server's protocol version (ex: 390).
    pub protocol: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BedrockPlayers {
    /// The maximum number of players that could be online at once.
    pub max: Option<i64>,
    /// The numbers of players online.
    pub online: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn online_document() -> Value {
        json!({
            "online": true,
            "port": 19132,
            "ip_address": "5.6.7.8",
            "eula_blocked": false,
            "retrieved_at": 1_700_000_000,
            "expires_at": 1_700_000_060,
            "version": {"name": "1.20.40", "protocol": 622},
            "players": {"online": 12, "max": 500},
            "motd": {"raw": "§aHello", "clean": "Hello", "html": "<span>Hello</span>"},
            "gamemode": "Survival",
            "server_id": "12345678901234567",
            "edition": "MCPE"
        })
    }

    #[test]
    fn test_online() {
        let BedrockStatus::Online(server) = Bedrock::project(online_document()).unwrap() else {
            panic!("expected an online server");
        };
        assert_eq!(server.port, 19132);
        assert_eq!(server.version.name.as_deref(), Some("1.20.40"));
        assert_eq!(server.version.protocol, Some(622));
        assert_eq!(server.players.online, Some(12));
        assert_eq!(server.players.max, Some(500));
        assert_eq!(server.motd.clean, "Hello");
        assert_eq!(server.gamemode.as_deref(), Some("Survival"));
        assert_eq!(server.server_id.as_deref(), Some("12345678901234567"));
        assert_eq!(server.edition, Some(BedrockEdition::PocketEdition));
        assert_eq!(server.expires_at, Some(1_700_000_060));
    }
    #[test]
    fn test_online_sparse_members() {
        let document = json!({
            "online": true,
            "port": 19132,
            "ip_address": null,
            "version": {},
            "players": {},
            "motd": {"raw": "", "clean": "", "html": ""}
        });
        let BedrockStatus::Online(server) = Bedrock::project(document).unwrap() else {
            panic!("expected an online server");
        };
        assert_eq!(server.ip_address, None);
        assert_eq!(server.version.name, None);
        assert_eq!(server.players.max, None);
        assert_eq!(server.edition, None);
        assert_eq!(server.eula_blocked, None);
    }
    #[test]
    fn test_education_edition() {
        let mut document = online_document();
        document["edition"] = json!("MCEE");
        let BedrockStatus::Online(server) = Bedrock::project(document).unwrap() else {
            panic!("expected an online server");
        };
        assert_eq!(server.edition, Some(BedrockEdition::EducationEdition));
        assert_eq!(server.edition.unwrap().to_string(), "MCEE");
    }
    #[test]
    fn test_unknown_edition() {
        let mut document = online_document();
        document["edition"] = json!("MCXX");
        assert!(matches!(
            Bedrock::project(document),
            Err(Error::MalformedResponse(_))
        ));
    }
    #[test]
    fn test_online_missing_required() {
        for key in ["players", "version", "motd", "port", "ip_address"] {
            let mut document = online_document();
            document.as_object_mut().unwrap().remove(key);
            assert!(
                matches!(Bedrock::project(document), Err(Error::MalformedResponse(_))),
                "missing `{key}` should be rejected"
            );
        }
    }
    #[test]
    fn test_offline_defaults() {
        let status = Bedrock::project(json!({"online": false, "port": 19132})).unwrap();
        assert!(!status.is_online());
        assert_eq!(status.port(), 19132);
        assert_eq!(
            status,
            BedrockStatus::Offline(BedrockOffline {
                port: 19132,
                ip_address: None,
                eula_blocked: false,
                retrieved_at: 0,
                expires_at: 0,
            })
        );
    }
    #[test]
    fn test_offline_null_defaults() {
        let document = json!({
            "online": false,
            "port": 19133,
            "ip_address": "5.6.7.8",
            "eula_blocked": null,
            "retrieved_at": null,
            "expiries_at": 99
        });
        let BedrockStatus::Offline(server) = Bedrock::project(document).unwrap() else {
            panic!("expected an offline server");
        };
        assert_eq!(server.ip_address.as_deref(), Some("5.6.7.8"));
        assert!(!server.eula_blocked);
        assert_eq!(server.retrieved_at, 0);
        assert_eq!(server.expires_at, 99);
    }
    #[test]
    fn test_both_key_spellings() {
        let mut document = online_document();
        document["expiries_at"] = json!(42);
        let BedrockStatus::Online(server) = Bedrock::project(document).unwrap() else {
            panic!("expected an online server");
        };
        assert_eq!(server.expires_at, Some(1_700_000_060));

        let document = json!({"online": false, "port": 19132, "expires_at": 7, "expiries_at": 42});
        let BedrockStatus::Offline(server) = Bedrock::project(document).unwrap() else {
            panic!("expected an offline server");
        };
        assert_eq!(server.expires_at, 7);
    }
    #[test]
    fn test_serialized_status_projects_again() {
        let online = Bedrock::project(online_document()).unwrap();
        let serialized = serde_json::to_value(&online).unwrap();
        assert_eq!(serialized["online"], json!(true));
        assert_eq!(serialized["edition"], json!("MCPE"));
        assert_eq!(Bedrock::project(serialized).unwrap(), online);

        let offline = Bedrock::project(json!({"online": false, "port": 19132})).unwrap();
        let serialized = serde_json::to_value(&offline).unwrap();
        assert_eq!(serialized["online"], json!(false));
        assert_eq!(Bedrock::project(serialized).unwrap(), offline);
    }
    #[test]
    fn test_projection_is_repeatable() {
        assert_eq!(
            Bedrock::project(online_document()).unwrap(),
            Bedrock::project(online_document()).unwrap()
        );
    }
}
