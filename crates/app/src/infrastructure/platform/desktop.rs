//! Desktop platform implementations
//!
//! Hands URLs to the operating system's default handler.

use url::Url;

use crate::ports::outbound::UrlLauncher;

/// Opens http(s) URLs in the default browser.
#[derive(Clone, Default)]
pub struct DesktopUrlLauncher;

impl DesktopUrlLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl UrlLauncher for DesktopUrlLauncher {
    fn open_url(&self, url: &str) -> bool {
        let Some(url) = web_url(url) else {
            tracing::warn!(url, "Refusing to open non-web URL");
            return false;
        };

        match webbrowser::open(url.as_str()) {
            Ok(()) => {
                tracing::debug!(url = %url, "Opened URL");
                true
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to open URL");
                false
            }
        }
    }
}

/// Parses `url` and keeps it only if it is http or https.
fn web_url(url: &str) -> Option<Url> {
    Url::parse(url.trim())
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_urls_are_accepted() {
        assert!(web_url("https://pokeapi.co/").is_some());
        assert!(web_url(" http://example.com/a?b=c ").is_some());
        assert!(web_url("file:///etc/passwd").is_none());
        assert!(web_url("javascript:alert(1)").is_none());
        assert!(web_url("not a url").is_none());
    }

    #[test]
    fn rejected_url_is_not_opened() {
        assert!(!DesktopUrlLauncher::new().open_url("ftp://example.com/file"));
        assert!(!DesktopUrlLauncher::new().open_url("file:///etc/hosts"));
    }

    #[test]
    fn query_string_survives_parsing() {
        let url = web_url("https://www.youtube.com/watch?v=abc").unwrap();
        assert_eq!(url.as_str(), "https://www.youtube.com/watch?v=abc");
    }
}
