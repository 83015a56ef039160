//! Publishing Service
//!
//! Owns the collaborators for a running site and exposes what the HTTP
//! layer needs: rendering published pages, listing pages, scanning the vault,
//! toggling publish state and serving raw vault files.
//!
//! Unpublished pages are reported as [`PublishError::PageNotFound`] so they
//! are indistinguishable from missing ones. When an index snapshot path is
//! configured, every scan and publish toggle is persisted.

use super::error::PublishError;
use super::vault_scanner::{scan_vault, ScanReport};
use crate::config::GardenConfig;
use crate::index::{InMemoryPageIndex, PageIndex};
use crate::models::{PageId, PageRecord, RenderedCanvas};
use crate::render::{self, RenderContext, RenderOptions, RenderedPage, SiteUrls, UrlBuilder};
use crate::store::{ContentStore, FsContentStore};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

pub struct PublishingService {
    pages: Arc<InMemoryPageIndex>,
    content: Arc<dyn ContentStore>,
    urls: Arc<dyn UrlBuilder>,
    options: RenderOptions,
    vault_root: PathBuf,
    index_path: Option<PathBuf>,
}

impl PublishingService {
    pub fn new(
        pages: Arc<InMemoryPageIndex>,
        content: Arc<dyn ContentStore>,
        urls: Arc<dyn UrlBuilder>,
        options: RenderOptions,
        vault_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pages,
            content,
            urls,
            options,
            vault_root: vault_root.into(),
            index_path: None,
        }
    }

    /// Persist the page index to `path` after every change
    pub fn with_index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_path = Some(path.into());
        self
    }

    /// Build a filesystem-backed service, loading the index snapshot if one
    /// is configured
    pub async fn from_config(config: &GardenConfig) -> Result<Self, PublishError> {
        let pages = match &config.index_path {
            Some(path) => InMemoryPageIndex::load(path).await?,
            None => InMemoryPageIndex::new(),
        };
        let content =
            FsContentStore::new(&config.vault_path).with_read_timeout(config.read_timeout);

        let mut service = Self::new(
            Arc::new(pages),
            Arc::new(content),
            Arc::new(SiteUrls::default()),
            config.render.clone(),
            &config.vault_path,
        );
        service.index_path = config.index_path.clone();
        Ok(service)
    }

    fn ctx(&self) -> RenderContext<'_> {
        RenderContext::new(
            self.pages.as_ref(),
            self.content.as_ref(),
            self.urls.as_ref(),
            &self.options,
        )
    }

    pub fn urls(&self) -> &dyn UrlBuilder {
        self.urls.as_ref()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn vault_root(&self) -> &Path {
        &self.vault_root
    }

    /// Published record by id
    pub async fn published_page(&self, id: PageId) -> Result<PageRecord, PublishError> {
        self.pages
            .get(id)
            .await
            .filter(|page| page.is_published)
            .ok_or_else(|| PublishError::page_not_found(id))
    }

    /// Render a published page
    #[instrument(skip(self), fields(page_id = %id))]
    pub async fn render_page(&self, id: PageId) -> Result<RenderedPage, PublishError> {
        let page = self.published_page(id).await?;
        tracing::debug!("Rendering {:?} page {}", page.file_type, page.file_path);
        Ok(render::render_page(self.ctx(), &page).await?)
    }

    /// Rendered canvas data of a published canvas page
    pub async fn render_canvas(&self, id: PageId) -> Result<RenderedCanvas, PublishError> {
        match self.render_page(id).await? {
            RenderedPage::Canvas { canvas, .. } => Ok(canvas),
            RenderedPage::Note { .. } => Err(PublishError::page_not_found(id)),
        }
    }

    /// Published pages, most recently published first
    pub async fn published_pages(&self) -> Vec<PageRecord> {
        self.pages.published().await
    }

    /// Every indexed page, most recently modified first
    pub async fn all_pages(&self) -> Vec<PageRecord> {
        self.pages.all().await
    }

    /// Index new vault files
    pub async fn scan(&self) -> Result<ScanReport, PublishError> {
        let report = scan_vault(&self.vault_root, &self.pages).await?;
        if report.new_files > 0 {
            self.persist().await?;
        }
        Ok(report)
    }

    /// Flip a page between published and unpublished
    pub async fn toggle_publish(&self, id: PageId) -> Result<PageRecord, PublishError> {
        let record = self.pages.toggle_published(id, Utc::now()).await?;
        tracing::info!(
            "Page {} ({}) is now {}",
            record.id,
            record.file_path,
            if record.is_published { "published" } else { "unpublished" }
        );
        self.persist().await?;
        Ok(record)
    }

    /// Raw bytes of a vault file, for images and other attachments
    pub async fn read_vault_file(&self, path: &str) -> Result<Vec<u8>, PublishError> {
        Ok(self.content.read_bytes(path).await?)
    }

    async fn persist(&self) -> Result<(), PublishError> {
        if let Some(path) = &self.index_path {
            self.pages.save(path).await?;
            tracing::debug!("Saved page index to {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryContentStore;

    async fn service_with(content: InMemoryContentStore, paths: &[&str]) -> PublishingService {
        let pages = InMemoryPageIndex::new();
        for path in paths {
            let title = path.trim_end_matches(".md").trim_end_matches(".canvas");
            pages.insert_if_absent(title, path, Utc::now()).await;
        }
        PublishingService::new(
            Arc::new(pages),
            Arc::new(content),
            Arc::new(SiteUrls::default()),
            RenderOptions::default(),
            "/nonexistent",
        )
    }

    #[tokio::test]
    async fn test_unpublished_page_is_not_found() {
        let service = service_with(InMemoryContentStore::new().with_file("A.md", "a"), &["A.md"]).await;
        let err = service.render_page(PageId(1)).await.unwrap_err();
        assert!(matches!(err, PublishError::PageNotFound { id: PageId(1) }));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_toggle_then_render() {
        let service =
            service_with(InMemoryContentStore::new().with_file("A.md", "*hi*"), &["A.md"]).await;

        let record = service.toggle_publish(PageId(1)).await.unwrap();
        assert!(record.is_published && record.published_at.is_some());

        match service.render_page(PageId(1)).await.unwrap() {
            RenderedPage::Note { html, .. } => assert_eq!(html, "<p><em>hi</em></p>\n"),
            other => panic!("expected a note, got {:?}", other),
        }
        assert_eq!(service.published_pages().await.len(), 1);

        let record = service.toggle_publish(PageId(1)).await.unwrap();
        assert!(!record.is_published && record.published_at.is_none());
        assert!(service.published_pages().await.is_empty());
    }

    #[tokio::test]
    async fn test_render_canvas_rejects_notes() {
        let service = service_with(
            InMemoryContentStore::new()
                .with_file("A.md", "a")
                .with_file("B.canvas", r#"{"nodes": []}"#),
            &["A.md", "B.canvas"],
        )
        .await;
        service.toggle_publish(PageId(1)).await.unwrap();
        service.toggle_publish(PageId(2)).await.unwrap();

        assert!(service.render_canvas(PageId(1)).await.unwrap_err().is_not_found());
        assert!(!service.render_canvas(PageId(2)).await.unwrap().is_failed());
    }

    #[tokio::test]
    async fn test_toggle_unknown_page() {
        let service = service_with(InMemoryContentStore::new(), &[]).await;
        let err = service.toggle_publish(PageId(42)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_missing_vault_file_is_not_found() {
        let service = service_with(InMemoryContentStore::new(), &[]).await;
        let err = service.read_vault_file("nope.png").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
