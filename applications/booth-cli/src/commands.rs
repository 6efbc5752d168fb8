/// Subcommand implementations
///
/// Every command writes its human-readable output to `out` so the binary can
/// hand in stdout and tests a buffer.
use crate::error::{CliError, Result};
use crate::session::Session;
use booth_core::ShowId;
use booth_importer::{export as export_queue, ImportError, ImportSummary};
use booth_playback::media_ended;
use booth_sync::SyncOutcome;
use std::future::Future;
use std::io::Write;
use tracing::info;

/// List the archive, marking queued shows
pub fn archive(
    session: &Session,
    bangers: bool,
    filter: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let controls = session.controls.borrow();
    let mut shown = 0;

    for show in session.catalogue.search(filter.unwrap_or_default()) {
        if bangers && !show.banger {
            continue;
        }
        let mark = if controls.controls().is_selected(&show.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let star = if show.banger { " *" } else { "" };
        writeln!(
            out,
            "{} {:<20} {}: {}{}",
            mark,
            show.id.as_str(),
            show.series,
            show.title,
            star
        )?;
        shown += 1;
    }

    if shown == 0 {
        writeln!(out, "No shows match")?;
    }
    Ok(())
}

/// Print the queue, head first
pub fn show(session: &Session, out: &mut impl Write) -> Result<()> {
    let entries = session.queue.entries();
    let Some((head, rest)) = entries.split_first() else {
        writeln!(out, "Queue is empty")?;
        return Ok(());
    };

    writeln!(
        out,
        "Now playing: {}  {}: {}",
        head.id, head.show.series, head.show.title
    )?;
    if !rest.is_empty() {
        writeln!(out, "Up next:")?;
        for (i, entry) in rest.iter().enumerate() {
            writeln!(
                out,
                "  {}. {}  {}: {}",
                i + 2,
                entry.id,
                entry.show.series,
                entry.show.title
            )?;
        }
    }
    Ok(())
}

/// Queue shows; already-queued shows move to the end
pub fn add(session: &mut Session, ids: &[String], out: &mut impl Write) -> Result<()> {
    for raw in ids {
        let id = ShowId::new(raw.trim());
        let bumped = session.queue.contains(&id);
        session.queue.add(&id)?;
        if bumped {
            writeln!(out, "Moved {} to the end of the queue", id)?;
        } else {
            writeln!(out, "Queued {}", id)?;
        }
    }
    Ok(())
}

pub fn remove(session: &mut Session, id: &str, out: &mut impl Write) -> Result<()> {
    let id = ShowId::new(id);
    if session.queue.remove(&id) {
        writeln!(out, "Removed {}", id)?;
    } else {
        writeln!(out, "{} is not queued", id)?;
    }
    Ok(())
}

pub fn move_up(session: &mut Session, id: &str, out: &mut impl Write) -> Result<()> {
    let id = ShowId::new(id);
    if !session.queue.move_up(&id) {
        writeln!(out, "{} cannot move up", id)?;
        return Ok(());
    }
    show(session, out)
}

pub fn move_down(session: &mut Session, id: &str, out: &mut impl Write) -> Result<()> {
    let id = ShowId::new(id);
    if !session.queue.move_down(&id) {
        writeln!(out, "{} cannot move down", id)?;
        return Ok(());
    }
    show(session, out)
}

pub fn shuffle(session: &mut Session, out: &mut impl Write) -> Result<()> {
    session.queue.shuffle();
    show(session, out)
}

pub fn clear(session: &mut Session, out: &mut impl Write) -> Result<()> {
    let count = session.queue.len();
    session.queue.clear();
    writeln!(out, "Cleared {} shows", count)?;
    Ok(())
}

/// Write the queue as import text
pub fn export(session: &Session, out: &mut impl Write) -> Result<()> {
    let text = export_queue(&session.queue);
    if !text.is_empty() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

/// Replace the queue from import text
///
/// A rejected import prints the annotated buffer and the suggestions, then
/// fails without touching the queue.
pub fn import(session: &mut Session, text: &str, out: &mut impl Write) -> Result<()> {
    match session.importer().import(text, &mut session.queue) {
        Ok(ImportSummary::Cleared) => {
            writeln!(out, "Queue cleared")?;
            Ok(())
        }
        Ok(ImportSummary::Replaced { count }) => {
            writeln!(out, "Imported {} shows", count)?;
            Ok(())
        }
        Err(ImportError::Rejected(report)) => {
            writeln!(out, "{}", report.buffer)?;
            writeln!(out)?;
            writeln!(out, "Not in the archive:")?;
            for line in &report.invalid {
                writeln!(out, "  {}", line)?;
            }
            Err(CliError::Import(ImportError::Rejected(report)))
        }
        Err(e) => Err(e.into()),
    }
}

/// The current show finished: drop it and move on
pub fn ended(session: &mut Session, out: &mut impl Write) -> Result<()> {
    match media_ended(&mut session.queue, &session.driver) {
        Some(finished) => {
            writeln!(out, "Finished {}", finished)?;
            show(session, out)
        }
        None => {
            writeln!(out, "Nothing is playing")?;
            Ok(())
        }
    }
}

/// Print the queue every time another context changes it
///
/// Runs until `shutdown` resolves or the store stops delivering changes.
pub async fn watch(
    session: &mut Session,
    out: &mut impl Write,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let mut sync = session.follow()?;
    show(session, out)?;
    info!("Watching {} for changes", session.config.storage.dir.display());

    tokio::pin!(shutdown);
    loop {
        let outcome = tokio::select! {
            () = &mut shutdown => None,
            outcome = sync.next(&mut session.queue) => outcome,
        };

        match outcome {
            Some(SyncOutcome::Resynced { .. }) => {
                writeln!(out, "---")?;
                show(session, out)?;
                out.flush()?;
            }
            Some(SyncOutcome::Unchanged | SyncOutcome::Ignored) => {}
            None => break,
        }
    }

    Ok(())
}
