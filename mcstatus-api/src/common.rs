//! Pieces shared by the Java and Bedrock status documents.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// The server's Message Of The Day, as shown in the server list.
///
/// The API always sends all three renderings together.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Motd {
    /// The MOTD with its `§` formatting codes intact.
    pub raw: String,
    /// The MOTD with all formatting stripped.
    pub clean: String,
    /// The MOTD rendered to HTML.
    pub html: String,
}

/// Read the `online` flag that decides which shape the document has.
pub(crate) fn discriminant(document: &Value) -> Result<bool, serde_json::Error> {
    let online = document
        .get("online")
        .ok_or_else(|| serde_json::Error::missing_field("online"))?;
    bool::deserialize(online)
}

/// Fold the `legacy` spelling of a key into `canonical`.
///
/// When both are present the canonical value wins and the legacy one is
/// discarded, so documents carrying both spellings still deserialize.
pub(crate) fn rename_legacy(object: &mut Value, legacy: &str, canonical: &str) {
    let Some(map) = object.as_object_mut() else {
        return;
    };
    if let Some(value) = map.remove(legacy) {
        map.entry(canonical).or_insert(value);
    }
}

/// Serializes a status next to its `online` flag, so the output can be
/// projected again.
#[derive(Serialize)]
pub(crate) struct Discriminated<'a, T> {
    pub online: bool,
    #[serde(flatten)]
    pub status: &'a T,
}

/// Deserialize an `Option` whose key must be present, even if its value is null.
pub(crate) fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Deserialize a value that falls back to its default when null.
///
/// Pair with `#[serde(default)]` to also cover a missing key.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
