use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use std::fmt::{Display, Formatter};

pub mod roster;
pub mod school;
pub mod student;

/// Attributes of a collection the upstream API serves at `GET {base}/{PATH}`.
pub trait ApiCollection: DeserializeOwned + Default {
    const PATH: &'static str;
}

#[derive(Deserialize, Debug)]
#[serde(bound = "A: DeserializeOwned + Default")]
pub struct Envelope<A> {
    #[serde(default)]
    pub data: Vec<Record<A>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(bound = "A: DeserializeOwned + Default")]
pub struct Record<A> {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: A,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads any scalar as text. Strings are kept, numbers and bools are stringified,
/// everything else (null, arrays, objects) is treated as absent.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
