//! Java Edition status documents.
//! [API reference](https://mcstatus.io/docs#java-status)

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    Edition, Error,
    common::{self, Motd},
};

/// Selects the Java Edition API endpoints.
///
/// # Examples
///
/// ```
/// use mcstatus_api::{Client, Java};
///
/// let client = Client::<Java>::new("mc.hypixel.net");
/// assert_eq!(client.target().unwrap(), ("mc.hypixel.net".to_string(), 25565));
/// ```
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Java;

impl Edition for Java {
    const PATH: &'static str = "java";
    const DEFAULT_PORT: u16 = 25565;

    type Status = JavaStatus;

    fn project(mut document: Value) -> Result<JavaStatus, Error> {
        normalize(&mut document);
        let status = if common::discriminant(&document)? {
            JavaStatus::Online(serde_json::from_value(document)?)
        } else {
            JavaStatus::Offline(serde_json::from_value(document)?)
        };
        Ok(status)
    }
}

/// Fold the spellings used by older API versions into the current ones.
fn normalize(document: &mut Value) {
    common::rename_legacy(document, "expiries_at", "expires_at");
    common::rename_legacy(document, "srv_record", "srv");
    let Some(players) = document.get_mut("players") else {
        return;
    };
    common::rename_legacy(players, "list", "sample");
    if let Some(Value::Array(sample)) = players.get_mut("sample") {
        for player in sample {
            common::rename_legacy(player, "raw", "name_raw");
            common::rename_legacy(player, "clean", "name_clean");
            common::rename_legacy(player, "html", "name_html");
        }
    }
}

/// The result of looking up a Java server.
///
/// Serializes as the server's fields plus `online`, the same shape
/// [`Java::project`](crate::Edition::project) reads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum JavaStatus {
    Online(JavaOnline),
    Offline(JavaOffline),
}

impl Serialize for JavaStatus {
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

impl JavaStatus {
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

    #[must_use]
    pub const fn eula_blocked(&self) -> Option<bool> {
        match self {
            Self::Online(server) => server.eula_blocked,
            Self::Offline(server) => server.eula_blocked,
        }
    }

    #[must_use]
    pub const fn retrieved_at(&self) -> Option<i64> {
        match self {
            Self::Online(server) => server.retrieved_at,
            Self::Offline(server) => server.retrieved_at,
        }
    }

    #[must_use]
    pub const fn expires_at(&self) -> Option<i64> {
        match self {
            Self::Online(server) => server.expires_at,
            Self::Offline(server) => server.expires_at,
        }
    }
}

/// An online Java server.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct JavaOnline {
    /// The port that was looked up.
    pub port: u16,
    /// The address the hostname resolved to.
    ///
    /// The key must be present in the document, but may be null.
    #[serde(deserialize_with = "common::required")]
    pub ip_address: Option<String>,
    /// Whether Mojang has blocked this server for breaking the EULA.
    pub eula_blocked: Option<bool>,
    /// When the API fetched this status.
    pub retrieved_at: Option<i64>,
    /// When the API's cached copy of this status expires.
    pub expires_at: Option<i64>,
    pub version: JavaVersion,
    pub players: JavaPlayers,
    pub hostname: String,
    pub motd: Motd,
    /// The server icon, a Base64-encoded PNG image.
    pub icon: Option<String>,
    pub mods: Option<Vec<Mod>>,
    /// The server software, such as `Paper`, when it could be detected.
    pub software: Option<String>,
    pub plugins: Option<Vec<Plugin>>,
    pub srv: Option<Srv>,
}

impl JavaOnline {
    /// Decode the server icon into PNG bytes.
    ///
    /// Accepts both bare Base64 and a `data:image/png;base64,` URI.
    ///
    /// # Errors
    /// If the icon is not valid Base64.
    pub fn icon_png(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
        let Some(icon) = &self.icon else {
            return Ok(None);
        };
        let encoded = icon.split_once(',').map_or(icon.as_str(), |(_, data)| data);
        STANDARD.decode(encoded).map(Some)
    }
}

/// An offline Java server.
///
/// Fields the API did not send are left empty.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct JavaOffline {
    pub hostname: Option<String>,
    pub port: u16,
    pub ip_address: Option<String>,
    pub eula_blocked: Option<bool>,
    pub retrieved_at: Option<i64>,
    pub expires_at: Option<i64>,
    pub srv: Option<Srv>,
}

/// Information about the server's version
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct JavaVersion {
    /// The name of the version the server is running
    ///
    /// In practice this comes in a large variety of different formats.
    #[serde(flatten)]
    pub name: VersionName,
    /// See [Protocol Version Numbers](https://wiki.vg/Protocol_version_numbers)
    pub protocol: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VersionName {
    #[serde(rename = "name_raw")]
    pub raw: String,
    #[serde(rename = "name_clean")]
    pub clean: String,
    #[serde(rename = "name_html")]
    pub html: String,
}

/// The stats for players on the server.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct JavaPlayers {
    /// The max amount of players.
    pub max: i64,
    /// The amount of players online.
    pub online: i64,
    /// A preview of which players are online
    ///
    /// In practice servers often don't send this or use it for more advertising
    pub sample: Option<Vec<Player>>,
}

/// An online player of the server.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Player {
    /// The player's UUID
    pub uuid: Option<String>,
    #[serde(rename = "name_raw")]
    pub raw: String,
    #[serde(rename = "name_clean")]
    pub clean: String,
    #[serde(rename = "name_html")]
    pub html: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Mod {
    pub name: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Plugin {
    pub name: String,
    pub version: String,
}

/// The SRV record the hostname pointed at.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Srv {
    pub host: String,
    pub port: u16,
}
