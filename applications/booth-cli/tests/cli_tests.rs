//! End-to-end command tests
//!
//! Each `Session` is one `booth` invocation. Sessions opened on the same data
//! directory see each other's queue exactly as separate processes would.

mod common;

use booth_cli::{commands, CliError};
use booth_importer::ImportError;
use booth_playback::MediaCall;
use common::{open, run};
use std::time::Duration;

// ===== Queue Commands =====

#[test]
fn test_queue_survives_between_invocations() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = open(dir.path());
    run(|out| {
        commands::add(
            &mut first,
            &["Sus-011-Hitch".to_string(), "XMin-003-Nightfall".to_string()],
            out,
        )
    });
    drop(first);

    let second = open(dir.path());
    let printed = run(|out| commands::show(&second, out));

    assert!(printed.starts_with("Now playing: Sus-011-Hitch"));
    assert!(printed.contains("2. XMin-003-Nightfall"));
}

#[test]
fn test_add_unknown_show_fails_and_keeps_queue() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());

    let mut out = Vec::new();
    let result = commands::add(&mut session, &["Sus-999-Nobody".to_string()], &mut out);

    assert!(matches!(result, Err(CliError::Queue(_))));
    assert!(session.queue.is_empty());
}

#[test]
fn test_re_add_reports_move() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());
    let ids = ["Esc-042-Leiningen".to_string(), "Esc-061-Poe".to_string()];
    run(|out| commands::add(&mut session, &ids, out));

    let printed = run(|out| commands::add(&mut session, &ids[..1], out));

    assert_eq!(printed, "Moved Esc-042-Leiningen to the end of the queue\n");
    assert_eq!(
        commands_export(&session),
        "Esc-061-Poe\nEsc-042-Leiningen\n"
    );
}

#[test]
fn test_archive_marks_queued_shows() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());
    run(|out| commands::add(&mut session, &["Sus-011-Hitch".to_string()], out));

    let printed = run(|out| commands::archive(&session, false, Some("suspense"), out));

    let hitch = printed
        .lines()
        .find(|line| line.contains("Sus-011-Hitch"))
        .unwrap();
    assert!(hitch.starts_with("[x]"));
    assert!(printed
        .lines()
        .filter(|line| !line.contains("Sus-011-Hitch"))
        .all(|line| line.starts_with("[ ]")));
}

#[test]
fn test_archive_bangers_only() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(dir.path());

    let printed = run(|out| commands::archive(&session, true, None, out));

    assert!(printed.lines().all(|line| line.ends_with(" *")));
    assert!(printed.contains("Lights-014-Oboler"));
    assert!(!printed.contains("Esc-061-Poe"));
}

#[test]
fn test_boundary_moves_report_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());
    run(|out| commands::add(&mut session, &["Sus-011-Hitch".to_string()], out));

    let printed = run(|out| commands::move_up(&mut session, "Sus-011-Hitch", out));

    assert_eq!(printed, "Sus-011-Hitch cannot move up\n");
}

#[test]
fn test_clear_then_show_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());
    run(|out| commands::add(&mut session, &["Sus-011-Hitch".to_string()], out));

    let printed = run(|out| commands::clear(&mut session, out));
    assert_eq!(printed, "Cleared 1 shows\n");

    let reopened = open(dir.path());
    assert_eq!(run(|out| commands::show(&reopened, out)), "Queue is empty\n");
}

// ===== Import / Export =====

fn commands_export(session: &booth_cli::Session) -> String {
    run(|out| commands::export(session, out))
}

#[test]
fn test_export_import_round_trip_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();

    let mut source = open(dir.path());
    run(|out| {
        commands::add(
            &mut source,
            &[
                "Lights-014-Oboler".to_string(),
                "Sus-047-Moorehead".to_string(),
                "XMin-037-Mars".to_string(),
            ],
            out,
        )
    });
    let text = commands_export(&source);

    let mut target = open(other.path());
    let printed = run(|out| commands::import(&mut target, &text, out));

    assert_eq!(printed, "Imported 3 shows\n");
    assert_eq!(commands_export(&target), text);
}

#[test]
fn test_import_typo_prints_suggestion_and_keeps_queue() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());
    run(|out| commands::add(&mut session, &["Esc-061-Poe".to_string()], out));

    let mut out = Vec::new();
    let result = commands::import(&mut session, "XMin-012-Parade\nSuspnse-011-Hitch\n", &mut out);
    let printed = String::from_utf8(out).unwrap();

    assert!(matches!(
        result,
        Err(CliError::Import(ImportError::Rejected(_)))
    ));
    assert!(printed.contains(
        "Suspnse-011-Hitch # not in the archive, did you mean Sus-011-Hitch?"
    ));
    assert!(printed.contains("Suspnse-011-Hitch -> Sus-011-Hitch"));
    assert_eq!(commands_export(&session), "Esc-061-Poe\n");
}

#[test]
fn test_blank_import_clears() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());
    run(|out| commands::add(&mut session, &["Esc-061-Poe".to_string()], out));

    let printed = run(|out| commands::import(&mut session, "\n\n", out));

    assert_eq!(printed, "Queue cleared\n");
    assert!(session.queue.is_empty());
}

// ===== Playback =====

#[test]
fn test_ended_advances_to_next_show() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = open(dir.path());
    run(|out| {
        commands::add(
            &mut first,
            &["Sus-011-Hitch".to_string(), "Sus-012-Welles".to_string()],
            out,
        )
    });
    drop(first);

    let mut session = open(dir.path());
    let printed = run(|out| commands::ended(&mut session, out));

    assert!(printed.starts_with("Finished Sus-011-Hitch\n"));
    assert!(printed.contains("Now playing: Sus-012-Welles"));
    let driver = session.driver.borrow();
    assert_eq!(driver.media().calls().last(), Some(&MediaCall::Play));
}

#[test]
fn test_ended_on_empty_queue() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());

    let printed = run(|out| commands::ended(&mut session, out));

    assert_eq!(printed, "Nothing is playing\n");
}

// ===== Watch =====

#[tokio::test]
async fn test_watch_prints_changes_from_other_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let mut watcher = open(dir.path());
    let mut writer = open(dir.path());

    let activity = async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        let mut sink = Vec::new();
        commands::add(&mut writer, &["XMin-003-Nightfall".to_string()], &mut sink).unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
    };

    let mut out = Vec::new();
    commands::watch(&mut watcher, &mut out, activity)
        .await
        .unwrap();
    let printed = String::from_utf8(out).unwrap();

    assert!(printed.starts_with("Queue is empty\n"));
    assert!(printed.contains("---\nNow playing: XMin-003-Nightfall"));
    assert_eq!(watcher.queue.len(), 1);
}
