//! Watch mode: regenerate the index when the asset root changes.
//!
//! Foreground loop: generate once, then watch the root recursively and
//! regenerate after each debounced burst of relevant events. Writes of the
//! output module itself are filtered so a regeneration never triggers the
//! next one.

use crate::error::AppError;
use crate::generate::{run_generate, IndexRequest};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::ffi::OsStr;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Watch mode configuration
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Debounce window in milliseconds
    pub debounce_ms: u64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

/// Whether an event should trigger regeneration.
///
/// Access notifications never do; neither do events that touch only the
/// output module. Events with no path information are treated as relevant.
fn event_touches_assets(event: &Event, output_name: &str) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    if event.paths.is_empty() {
        return true;
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name() != Some(OsStr::new(output_name)))
}

/// Generate once, then regenerate on every debounced change burst.
///
/// Returns when the watch channel closes; regeneration failures are logged
/// and the watch continues.
pub fn run_watch(request: &IndexRequest, options: &WatchOptions) -> Result<(), AppError> {
    let outcome = run_generate(request, false)?;
    info!(
        path = %outcome.output_path.display(),
        folders = outcome.folders.len(),
        entries = outcome.entry_count,
        "Initial index generated; watching for changes"
    );

    let (tx, rx) = mpsc::channel::<Result<Event, notify::Error>>();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })
    .map_err(|e| AppError::Watch(e.to_string()))?;
    watcher
        .watch(&request.root, RecursiveMode::Recursive)
        .map_err(|e| AppError::Watch(e.to_string()))?;

    let debounce = Duration::from_millis(options.debounce_ms);
    loop {
        let first = match rx.recv() {
            Ok(event) => event,
            Err(_) => return Ok(()),
        };
        let mut dirty = match first {
            Ok(event) => event_touches_assets(&event, &request.output_name),
            Err(e) => {
                warn!("Watch event error: {}", e);
                true
            }
        };

        // Drain the burst until the debounce window stays quiet.
        loop {
            match rx.recv_timeout(debounce) {
                Ok(Ok(event)) => {
                    dirty |= event_touches_assets(&event, &request.output_name);
                }
                Ok(Err(e)) => {
                    warn!("Watch event error: {}", e);
                    dirty = true;
                }
                Err(mpsc::RecvTimeoutError::Timeout) => break,
                Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        if !dirty {
            continue;
        }
        match run_generate(request, false) {
            Ok(outcome) => info!(
                folders = outcome.folders.len(),
                entries = outcome.entry_count,
                bytes = outcome.bytes,
                "Index regenerated"
            ),
            Err(e) => error!("Regeneration failed: {}", e),
        }
    }
}
