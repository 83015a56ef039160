//! Public URLs for pages and vault files

use crate::models::PageId;

/// Maps pages and vault files to the URLs the site serves them at
pub trait UrlBuilder: Send + Sync {
    fn page_url(&self, id: PageId) -> String;

    /// URL serving the raw file at a vault-relative path
    fn file_url(&self, path: &str) -> String;
}

/// Default layout: `{base}/page/{id}` and `{base}/vault_file/{path}`
#[derive(Debug, Clone, Default)]
pub struct SiteUrls {
    base_path: String,
}

impl SiteUrls {
    /// `base_path` is a prefix such as `/garden`; trailing slashes are dropped
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into().trim_end_matches('/').to_string(),
        }
    }
}

impl UrlBuilder for SiteUrls {
    fn page_url(&self, id: PageId) -> String {
        format!("{}/page/{}", self.base_path, id)
    }

    fn file_url(&self, path: &str) -> String {
        format!("{}/vault_file/{}", self.base_path, encode_vault_path(path))
    }
}

/// Percent-encode each segment of a vault path, keeping `/` separators
pub fn encode_vault_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let urls = SiteUrls::default();
        assert_eq!(urls.page_url(PageId(7)), "/page/7");
        assert_eq!(urls.file_url("img/photo.png"), "/vault_file/img/photo.png");
    }

    #[test]
    fn test_base_path_prefix() {
        let urls = SiteUrls::new("/garden/");
        assert_eq!(urls.page_url(PageId(1)), "/garden/page/1");
    }

    #[test]
    fn test_file_url_encodes_segments() {
        let urls = SiteUrls::default();
        assert_eq!(
            urls.file_url(r"Team Docs\my photo#1.png"),
            "/vault_file/Team%20Docs/my%20photo%231.png"
        );
    }
}
