use crate::data::{ApiCollection, Record, lenient_text};
use serde::Deserialize;

pub type Student = Record<StudentAttributes>;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttributes {
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub blood_group: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub parent_contact_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub parent_email_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub current_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub apartment_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub updated_at: Option<String>,
}

impl ApiCollection for StudentAttributes {
    const PATH: &'static str = "students";
}

impl StudentAttributes {
    /// `"{first} {last}"`, with absent parts left blank.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}
