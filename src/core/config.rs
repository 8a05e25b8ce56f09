//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server-side configuration loaded from environment variables.
///
/// The site itself has no backend state; these values only parameterize
/// the serving shell and the external collaborators the page links to.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inbox shown in the contact section and used by the (external)
    /// form collaborator. Example: info@nexusfitness.com
    pub contact_email: Option<String>,

    /// Endpoint the newsletter form would post to once a backend exists.
    pub newsletter_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            contact_email: std::env::var("CONTACT_EMAIL").ok(),
            newsletter_endpoint: std::env::var("NEWSLETTER_ENDPOINT").ok(),
        }
    }

    /// Check if a contact inbox is configured
    pub fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }

    /// Check if a newsletter endpoint is configured
    pub fn has_newsletter_endpoint(&self) -> bool {
        self.newsletter_endpoint.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Constructed directly rather than via env vars - thread safe

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            contact_email: Some("info@nexusfitness.com".to_string()),
            newsletter_endpoint: Some("https://mail.example.com/subscribe".to_string()),
        };

        assert!(config.has_contact_email());
        assert!(config.has_newsletter_endpoint());
        assert_eq!(
            config.contact_email,
            Some("info@nexusfitness.com".to_string())
        );
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            contact_email: None,
            newsletter_endpoint: None,
        };

        assert!(!config.has_contact_email());
        assert!(!config.has_newsletter_endpoint());
    }

    #[test]
    fn test_config_with_partial_fields() {
        let config = Config {
            contact_email: Some("front-desk@nexusfitness.com".to_string()),
            newsletter_endpoint: None,
        };

        assert!(config.has_contact_email());
        assert!(!config.has_newsletter_endpoint());
    }
}
