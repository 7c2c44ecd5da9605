use serde::{Deserialize, Serialize};

// MemberUpdate carries a partial change to a member; None leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl MemberUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
}
