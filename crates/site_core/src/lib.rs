use std::sync::Arc;

use shared::{
    content::PortfolioItem,
    domain::{CategoryFilter, ContentSlice, Page},
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod composer;
pub mod config;
pub mod contact;
pub mod fallback;
pub mod filter;
pub mod hydrate;
pub mod lightbox;
pub mod navigation;
pub mod session;
pub mod source;
pub mod store;

use composer::{compose, resolved_portfolio, Frame};
use config::{SettingsError, SiteSettings};
use contact::{ContactError, ContactField, InquirySink, LoggingInquirySink, SUBMIT_CONFIRMATION};
use hydrate::{spawn_hydration, Hydration};
use lightbox::LightboxTarget;
use session::PageSession;
use source::{ContentSource, HttpContentSource};
use store::{ContentEvent, ContentStore};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("no portfolio item at position {index}, {shown} shown")]
    NoSuchItem { index: usize, shown: usize },
    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// One page instance: the session state, the content store it renders from,
/// and the collaborators that feed them.
pub struct Site {
    source: Arc<dyn ContentSource>,
    store: Arc<ContentStore>,
    inquiries: Arc<dyn InquirySink>,
    session: Mutex<PageSession>,
}

impl Site {
    pub fn new(source: Arc<dyn ContentSource>) -> Arc<Self> {
        Self::new_with_dependencies(source, Arc::new(LoggingInquirySink))
    }

    pub fn new_with_dependencies(
        source: Arc<dyn ContentSource>,
        inquiries: Arc<dyn InquirySink>,
    ) -> Arc<Self> {
        Arc::new(Self {
            source,
            store: Arc::new(ContentStore::new()),
            inquiries,
            session: Mutex::new(PageSession::default()),
        })
    }

    /// Resolves the content addresses once; every fetch of this site reuses them.
    pub fn from_settings(settings: &SiteSettings) -> Result<Arc<Self>, SiteError> {
        let source = HttpContentSource::from_settings(settings)?;
        info!(
            hero = %source.endpoints().url(ContentSlice::Hero),
            cache_bust = settings.cache_bust,
            "site: content endpoints resolved"
        );
        Ok(Self::new(Arc::new(source)))
    }

    /// Issues the three content fetches and returns without waiting for them.
    pub fn start(&self) -> Hydration {
        info!("site: session started, hydrating content");
        spawn_hydration(Arc::clone(&self.source), Arc::clone(&self.store))
    }

    pub fn store(&self) -> &Arc<ContentStore> {
        &self.store
    }

    pub fn subscribe_content(&self) -> broadcast::Receiver<ContentEvent> {
        self.store.subscribe()
    }

    pub async fn session(&self) -> PageSession {
        self.session.lock().await.clone()
    }

    pub async fn navigate(&self, page: Page) {
        self.session.lock().await.navigate(page);
    }

    pub async fn toggle_mobile_menu(&self) {
        self.session.lock().await.navigation.toggle_mobile_menu();
    }

    pub async fn record_scroll(&self, offset: u32) {
        self.session.lock().await.navigation.record_scroll(offset);
    }

    pub async fn select_category(&self, category: CategoryFilter) {
        self.session.lock().await.filter.select(category);
    }

    /// Opens the viewer on the `index`-th item of the list currently shown.
    pub async fn open_lightbox(&self, index: usize) -> Result<PortfolioItem, SiteError> {
        let content = self.store.snapshot().await;
        let (items, _) = resolved_portfolio(&content);

        let mut session = self.session.lock().await;
        let shown = session.filter.apply(&items);
        let item = shown
            .get(index)
            .cloned()
            .ok_or(SiteError::NoSuchItem {
                index,
                shown: shown.len(),
            })?;
        session.lightbox.open(item.clone());
        Ok(item)
    }

    pub async fn close_lightbox(&self) {
        self.session.lock().await.lightbox.close();
    }

    /// Returns `true` when the click dismissed the viewer.
    pub async fn lightbox_click(&self, target: LightboxTarget) -> bool {
        self.session.lock().await.lightbox.handle_click(target)
    }

    pub async fn update_contact(&self, field: ContactField, value: &str) -> Result<(), SiteError> {
        self.session.lock().await.contact.update(field, value)?;
        Ok(())
    }

    /// Hands the inquiry to the sink once and clears the form. Delivery
    /// problems are logged only. Edits made while the inquiry is in flight
    /// are rejected, so clearing never discards unsent input.
    pub async fn submit_contact(&self) -> Result<&'static str, SiteError> {
        let inquiry = self.session.lock().await.contact.begin_submit()?;

        if let Err(err) = self.inquiries.deliver(&inquiry).await {
            warn!(error = %err, "contact: inquiry delivery failed");
        }

        self.session.lock().await.contact.finish_submit();
        Ok(SUBMIT_CONFIRMATION)
    }

    pub async fn render(&self) -> Frame {
        let content = self.store.snapshot().await;
        let session = self.session.lock().await;
        compose(&session, &content)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
