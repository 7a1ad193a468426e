//! Shared note actions used by UI components.

use std::future::Future;

use dioxus::prelude::*;
use notes_core::store::{apply_mutation, fetch_snapshot};
use notes_core::{Mutation, Partition};

use crate::state::AppState;

/// Replace the snapshot with the current partition's listing.
///
/// Reading `show_deleted` here subscribes the calling effect, so a toggle
/// triggers exactly one new fetch.
pub fn refresh_notes(state: AppState) {
    let partition = state.partition();
    spawn(fetch_into(state, partition));
}

/// Send a mutation, settle the form, then refresh whatever the outcome.
///
/// Cards start mutations that hide the card itself, so the task must not be
/// owned by the calling component.
pub fn run_mutation(state: AppState, mutation: Mutation) {
    let store = state.store.peek().clone();
    let mut buffer = state.buffer;
    spawn_detached(async move {
        let outcome = apply_mutation(&store, &mutation).await;
        match (&outcome, mutation.target()) {
            (Ok(()), Some(id)) => tracing::info!("{} note {}", mutation.verb(), id),
            (Ok(()), None) => tracing::info!("{} note", mutation.verb()),
            (Err(e), _) => tracing::error!("Failed to {} note: {}", mutation.verb(), e),
        }
        buffer.write().settle(&mutation, outcome.is_ok());

        let partition = Partition::from_show_deleted(*state.show_deleted.peek());
        fetch_into(state, partition).await;
    });
}

/// Run `task` on the root scope so it outlives the component that started it.
fn spawn_detached(task: impl Future<Output = ()> + 'static) {
    spawn_forever(task);
}

async fn fetch_into(state: AppState, partition: Partition) {
    let store = state.store.peek().clone();
    let mut notes = state.notes;
    let snapshot = fetch_snapshot(&store, partition).await;
    tracing::debug!("Loaded {} {} notes", snapshot.len(), partition);
    notes.set(snapshot);
}
