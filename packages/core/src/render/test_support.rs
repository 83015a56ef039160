//! Shared fixture for render tests

use super::{RenderContext, RenderOptions, SiteUrls};
use crate::index::InMemoryPageIndex;
use crate::models::{PageId, PageRecord};
use crate::store::InMemoryContentStore;
use chrono::{TimeZone, Utc};

pub(crate) fn record(id: u64, title: &str, path: &str, published: bool) -> PageRecord {
    let modified = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let mut record = PageRecord::new(PageId(id), title, path, modified);
    if published {
        record.publish(modified);
    }
    record
}

pub(crate) struct Fixture {
    pub pages: InMemoryPageIndex,
    pub content: InMemoryContentStore,
    pub urls: SiteUrls,
    pub options: RenderOptions,
}

impl Fixture {
    pub fn new(records: Vec<PageRecord>) -> Self {
        Self {
            pages: InMemoryPageIndex::from_records(records),
            content: InMemoryContentStore::new(),
            urls: SiteUrls::default(),
            options: RenderOptions::default(),
        }
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.content = self.content.with_file(path, content);
        self
    }

    pub fn unreadable(mut self, path: &str) -> Self {
        self.content = self.content.with_unreadable(path);
        self
    }

    pub fn max_embed_depth(mut self, depth: usize) -> Self {
        self.options.max_embed_depth = depth;
        self
    }

    pub fn ctx(&self) -> RenderContext<'_> {
        RenderContext::new(&self.pages, &self.content, &self.urls, &self.options)
    }
}
