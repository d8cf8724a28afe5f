//! Contact links assembled on demand.
//!
//! The booking URL and email address are stored in pieces and only joined when
//! the visitor clicks, so neither appears verbatim in the served page.

use folio_types::ContactConfig;

#[derive(Debug, Clone)]
pub struct ContactLinks {
    config: ContactConfig,
}

impl ContactLinks {
    pub fn new(config: ContactConfig) -> Self {
        Self { config }
    }

    pub fn calendly_url(&self) -> String {
        let base = self.config.calendly_base.trim_end_matches('/');
        [base.to_string(), self.config.calendly_path.join("/")].join("/")
    }

    pub fn email_address(&self) -> String {
        format!("{}@{}", self.config.email_local, self.config.email_domain.join("."))
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_links() {
        let links = ContactLinks::new(ContactConfig::default());
        assert_eq!(links.calendly_url(), "https://calendly.com/mhellis03/michael-ellis-15-min");
        assert_eq!(links.email_address(), "mhellis03@gmail.com");
        assert_eq!(links.mailto_href(), "mailto:mhellis03@gmail.com");
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let config = ContactConfig {
            calendly_base: "https://cal.example/".to_string(),
            calendly_path: vec!["me".to_string()],
            ..ContactConfig::default()
        };
        assert_eq!(ContactLinks::new(config).calendly_url(), "https://cal.example/me");
    }
}
