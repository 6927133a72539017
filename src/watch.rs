use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;

/// Watches `src_root` and invokes `regenerate` once per batch of change
/// events until the watcher channel closes.
///
/// Regenerations are serialized on this thread: events arriving while a
/// run is in flight queue up and collapse into a single pending rerun,
/// so concurrent runs can never interleave on the output file.
pub fn watch_and_regenerate<F>(src_root: &Path, mut regenerate: F) -> notify::Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |event: notify::Result<Event>| {
        if let Ok(event) = event
            && is_relevant(&event.kind)
        {
            let _ = tx.send(());
        }
    })?;
    watcher.watch(src_root, RecursiveMode::Recursive)?;

    while rx.recv().is_ok() {
        // collapse the burst of events that accompanies a single save
        drain_pending(&rx);
        regenerate();
    }

    Ok(())
}

fn is_relevant(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

fn drain_pending(rx: &mpsc::Receiver<()>) {
    while rx.try_recv().is_ok() {}
}
