use serde::Serialize;
use shared::{
    content::{AboutContent, HeroContent, PortfolioCollection},
    domain::ContentSlice,
    error::{ContentError, ContentErrorKind},
};
use tokio::sync::{broadcast, RwLock};

const CONTENT_EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Pending,
    Loaded(T),
    Failed(ContentError),
}

impl<T> Slot<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Loaded(value) => Some(value),
            Slot::Pending | Slot::Failed(_) => None,
        }
    }

    pub fn status(&self) -> SlotStatus {
        match self {
            Slot::Pending => SlotStatus::Pending,
            Slot::Loaded(_) => SlotStatus::Loaded,
            Slot::Failed(err) => SlotStatus::Failed(err.kind()),
        }
    }

    fn fail(&mut self, err: ContentError) {
        // A loaded value is never replaced by a later failure.
        if !matches!(self, Slot::Loaded(_)) {
            *self = Slot::Failed(err);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "kind", rename_all = "snake_case")]
pub enum SlotStatus {
    Pending,
    Loaded,
    Failed(ContentErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    SliceLoaded(ContentSlice),
    SliceFailed {
        slice: ContentSlice,
        kind: ContentErrorKind,
    },
    /// Follows a `SliceLoaded` whose document was usable only in part.
    SliceDegraded {
        slice: ContentSlice,
        kind: ContentErrorKind,
    },
}

/// Point-in-time copy of whatever has loaded so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSnapshot {
    pub hero: Option<HeroContent>,
    pub about: Option<AboutContent>,
    pub portfolio: Option<PortfolioCollection>,
}

/// One lock per slice: a completing fetch only ever touches its own slot.
pub struct ContentStore {
    hero: RwLock<Slot<HeroContent>>,
    about: RwLock<Slot<AboutContent>>,
    portfolio: RwLock<Slot<PortfolioCollection>>,
    events: broadcast::Sender<ContentEvent>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(CONTENT_EVENT_CAPACITY);
        Self {
            hero: RwLock::new(Slot::Pending),
            about: RwLock::new(Slot::Pending),
            portfolio: RwLock::new(Slot::Pending),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.events.subscribe()
    }

    pub async fn put_hero(&self, hero: HeroContent) {
        *self.hero.write().await = Slot::Loaded(hero);
        self.notify(ContentEvent::SliceLoaded(ContentSlice::Hero));
    }

    pub async fn put_about(&self, about: AboutContent) {
        *self.about.write().await = Slot::Loaded(about);
        self.notify(ContentEvent::SliceLoaded(ContentSlice::About));
    }

    pub async fn put_portfolio(&self, portfolio: PortfolioCollection) {
        *self.portfolio.write().await = Slot::Loaded(portfolio);
        self.notify(ContentEvent::SliceLoaded(ContentSlice::Portfolio));
    }

    /// Loads the slice as an empty collection and reports why.
    pub async fn put_mismatched_portfolio(&self, err: ContentError) {
        *self.portfolio.write().await = Slot::Loaded(PortfolioCollection::default());
        self.notify(ContentEvent::SliceLoaded(ContentSlice::Portfolio));
        self.notify(ContentEvent::SliceDegraded {
            slice: err.slice(),
            kind: err.kind(),
        });
    }

    pub async fn record_failure(&self, err: ContentError) {
        let slice = err.slice();
        let kind = err.kind();
        match slice {
            ContentSlice::Hero => self.hero.write().await.fail(err),
            ContentSlice::About => self.about.write().await.fail(err),
            ContentSlice::Portfolio => self.portfolio.write().await.fail(err),
        }
        self.notify(ContentEvent::SliceFailed { slice, kind });
    }

    pub async fn status(&self, slice: ContentSlice) -> SlotStatus {
        match slice {
            ContentSlice::Hero => self.hero.read().await.status(),
            ContentSlice::About => self.about.read().await.status(),
            ContentSlice::Portfolio => self.portfolio.read().await.status(),
        }
    }

    pub async fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            hero: self.hero.read().await.value().cloned(),
            about: self.about.read().await.value().cloned(),
            portfolio: self.portfolio.read().await.value().cloned(),
        }
    }

    fn notify(&self, event: ContentEvent) {
        // Nobody listening is fine: the page may already be gone.
        let _ = self.events.send(event);
    }
}
