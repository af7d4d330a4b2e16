//! Session-start content hydration: three independent fetches into the store.

use std::sync::Arc;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use shared::{
    content::{AboutContent, HeroContent, PortfolioCollection, PortfolioDocument},
    domain::ContentSlice,
    error::ContentError,
};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::{source::ContentSource, store::ContentStore};

/// Handles of the in-flight fetches. Dropping it does not cancel anything.
pub struct Hydration {
    tasks: Vec<(ContentSlice, JoinHandle<()>)>,
}

impl Hydration {
    /// Waits until every fetch has either loaded or failed. Returns the
    /// slices whose task panicked or was cancelled.
    pub async fn settled(self) -> Vec<ContentSlice> {
        let (slices, handles): (Vec<_>, Vec<_>) = self.tasks.into_iter().unzip();
        let mut aborted = Vec::new();
        for (slice, outcome) in slices.into_iter().zip(join_all(handles).await) {
            if let Err(err) = outcome {
                error!(slice = %slice, error = %err, "content: hydration task aborted");
                aborted.push(slice);
            }
        }
        aborted
    }
}

pub fn spawn_hydration(source: Arc<dyn ContentSource>, store: Arc<ContentStore>) -> Hydration {
    let tasks = ContentSlice::ALL
        .into_iter()
        .map(|slice| {
            let source = Arc::clone(&source);
            let store = Arc::clone(&store);
            let handle = tokio::spawn(async move {
                hydrate_slice(source.as_ref(), &store, slice).await;
            });
            (slice, handle)
        })
        .collect();
    Hydration { tasks }
}

pub async fn hydrate_slice(source: &dyn ContentSource, store: &ContentStore, slice: ContentSlice) {
    let result = match source.fetch(slice).await {
        Ok(body) => apply(store, slice, &body).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => info!(slice = %slice, "content: slice loaded"),
        Err(err) => {
            warn!(slice = %slice, kind = ?err.kind(), error = %err, "content: slice unavailable, using fallback");
            store.record_failure(err).await;
        }
    }
}

async fn apply(store: &ContentStore, slice: ContentSlice, body: &[u8]) -> Result<(), ContentError> {
    match slice {
        ContentSlice::Hero => store.put_hero(decode::<HeroContent>(slice, body)?).await,
        ContentSlice::About => store.put_about(decode::<AboutContent>(slice, body)?).await,
        ContentSlice::Portfolio => match decode_portfolio(body) {
            Ok(portfolio) => store.put_portfolio(portfolio).await,
            Err(err @ ContentError::ShapeMismatch) => {
                warn!(kind = ?err.kind(), "content: {err}, showing no items");
                store.put_mismatched_portfolio(err).await;
            }
            Err(err) => return Err(err),
        },
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(slice: ContentSlice, body: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(body).map_err(|err| ContentError::Parse {
        slice,
        message: err.to_string(),
    })
}

/// Accepts `[...]` and `{ "items": [...] }`. Valid JSON in any other shape
/// is a [`ContentError::ShapeMismatch`]. Entries that are not items are
/// skipped; the rest keep their order.
pub fn decode_portfolio(body: &[u8]) -> Result<PortfolioCollection, ContentError> {
    let value: serde_json::Value = decode(ContentSlice::Portfolio, body)?;
    let document = PortfolioDocument::from_value(value).ok_or(ContentError::ShapeMismatch)?;
    let total = document.len();
    let (collection, rejected) = document.into_collection();
    for entry in &rejected {
        warn!(
            position = entry.position,
            error = %entry.error,
            "content: skipping malformed portfolio entry"
        );
    }
    if !rejected.is_empty() {
        info!(kept = collection.len(), total, "content: portfolio partially decoded");
    }
    Ok(collection)
}

#[cfg(test)]
#[path = "tests/hydrate_tests.rs"]
mod tests;
