use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    pub role: String,
    pub contact_email: Option<String>,
    pub website: Option<String>,
}
