use std::env;

/// Single shared invitation code gating registration.
#[derive(Clone, Debug)]
pub struct InvitationConfig {
    pub code: String,
}

impl InvitationConfig {
    pub fn from_env() -> Self {
        Self {
            code: env::var("INVITATION_CODE").unwrap_or_else(|_| "LASP2026".to_string()),
        }
    }
}
