use serde::{Deserialize, Serialize};

/// Signed-in user profile, stored alongside the token as JSON.
/// `created_at` is kept as the ISO string the server issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    #[serde(default = "default_user_type")]
    pub user_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_user_type() -> String {
    "individual".to_string()
}

fn default_active() -> bool {
    true
}

impl UserRecord {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            user_type: default_user_type(),
            full_name: None,
            company_name: None,
            phone: None,
            balance: 0.0,
            created_at: None,
            is_active: true,
        }
    }

    /// Full name when set, otherwise the email address
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}
