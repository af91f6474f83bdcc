use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: i64,
    pub owner_id: i64,
    pub file_url: String,
    pub file_name: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
}

impl Identified for Attachment {
    fn id(&self) -> i64 {
        self.id
    }
}
