use crate::data::{ApiCollection, Record, lenient_text};
use serde::Deserialize;

pub type School = Record<SchoolAttributes>;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolAttributes {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

impl ApiCollection for SchoolAttributes {
    const PATH: &'static str = "schools";
}
