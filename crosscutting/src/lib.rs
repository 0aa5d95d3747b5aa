pub mod settings;

use std::fmt;

/// Point-in-time snapshot of temporary AWS credentials.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub token: String,
}

impl Credentials {
    pub fn new(access_key: &str, secret_key: &str, token: &str) -> Self {
        Credentials {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            token: token.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .field("token", &"** redacted **")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secrets() {
        let credentials = Credentials::new("AKIA", "very-secret", "session-token");
        let output = format!("{:?}", credentials);
        assert!(output.contains("AKIA"));
        assert!(!output.contains("very-secret"));
        assert!(!output.contains("session-token"));
    }
}
