use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A session remembered in the favourites document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteSession {
    pub name: String,
    pub path: PathBuf,

    /// Command run as the first window of a newly created session.
    /// Stored as an empty string when unset.
    #[serde(
        default,
        serialize_with = "serialize_cmd",
        deserialize_with = "deserialize_cmd"
    )]
    pub cmd: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,

    /// Environment applied when the session is created.
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: BTreeMap<String, String>,
}

impl FavouriteSession {
    /// A fresh record with no command, aliases or environment.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            cmd: None,
            aliases: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Whether `token` is this record's name or one of its aliases.
    pub fn answers_to(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|alias| alias == token)
    }
}

/// On-disk shape of the favourites document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavouritesData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sessions: Vec<FavouriteSession>,
}

fn serialize_cmd<S: Serializer>(cmd: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(cmd.as_deref().unwrap_or(""))
}

fn deserialize_cmd<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let cmd = Option::<String>::deserialize(deserializer)?;
    Ok(cmd.filter(|c| !c.is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
