//! Import/export integration tests
//!
//! Whole-buffer flows against a real queue: round trips, clearing, rejection
//! with suggestions and resubmission of an annotated buffer.

use booth_core::{Catalogue, ShowId, ShowMetadata, StaticCatalogue};
use booth_importer::{export, FuzzyMatcher, ImportError, ImportReport, ImportSummary, Importer};
use booth_playback::{ControlSync, QueueStore, RecordingControls};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

// ===== Test Helpers =====

fn archive() -> Arc<dyn Catalogue> {
    Arc::new(StaticCatalogue::from_shows(vec![
        ShowMetadata::new("A", "Alpha", "First"),
        ShowMetadata::new("B", "Alpha", "Second"),
        ShowMetadata::new("Sus-011-Hitch", "Suspense", "The Lodger"),
        ShowMetadata::new("Sus-012-Welles", "Suspense", "Donovan's Brain"),
        ShowMetadata::new("XMin-003-Nightfall", "X Minus One", "Nightfall"),
    ]))
}

fn order(queue: &QueueStore) -> Vec<&str> {
    queue.entries().iter().map(|entry| entry.id.as_str()).collect()
}

fn rejected(result: Result<ImportSummary, ImportError>) -> ImportReport {
    match result {
        Err(ImportError::Rejected(report)) => report,
        other => panic!("expected rejection, got {:?}", other),
    }
}

// ===== Applying =====

#[test]
fn test_duplicates_collapse_in_first_occurrence_order() {
    let mut queue = QueueStore::new(archive());

    let summary = Importer::new().import("A\nA\nB", &mut queue).unwrap();

    assert_eq!(summary, ImportSummary::Replaced { count: 2 });
    assert_eq!(order(&queue), vec!["A", "B"]);
}

#[test]
fn test_blank_import_clears_queue() {
    let mut queue = QueueStore::new(archive());
    queue.add(&ShowId::new("A")).unwrap();

    let summary = Importer::new().import("   \n\n", &mut queue).unwrap();

    assert_eq!(summary, ImportSummary::Cleared);
    assert!(queue.is_empty());
}

#[test]
fn test_export_then_import_is_identity() {
    let mut queue = QueueStore::new(archive());
    for id in ["XMin-003-Nightfall", "A", "Sus-011-Hitch"] {
        queue.add(&ShowId::new(id)).unwrap();
    }
    let text = export(&queue);

    let mut other = QueueStore::new(archive());
    Importer::new().import(&text, &mut other).unwrap();

    assert_eq!(other.ids(), queue.ids());
}

#[test]
fn test_export_of_empty_queue_imports_as_clear() {
    let queue = QueueStore::new(archive());
    let mut other = QueueStore::new(archive());
    other.add(&ShowId::new("A")).unwrap();

    let summary = Importer::new().import(&export(&queue), &mut other).unwrap();

    assert_eq!(summary, ImportSummary::Cleared);
    assert!(other.is_empty());
}

#[test]
fn test_import_updates_catalogue_controls() {
    let mut queue = QueueStore::new(archive());
    let sync = Rc::new(RefCell::new(ControlSync::new(RecordingControls::new())));
    queue.subscribe(Rc::clone(&sync));
    queue.add(&ShowId::new("A")).unwrap();

    Importer::new()
        .import("Sus-011-Hitch\nB", &mut queue)
        .unwrap();

    let sync = sync.borrow();
    let marked: Vec<&str> = sync.controls().selected().map(|id| id.as_str()).collect();
    assert_eq!(marked, vec!["B", "Sus-011-Hitch"]);
}

// ===== Rejection =====

#[test]
fn test_typo_is_rejected_with_suggestion() {
    let mut queue = QueueStore::new(archive());
    queue.add(&ShowId::new("A")).unwrap();

    let report = rejected(
        Importer::new().import("B\nSuspnse-011-Hitch", &mut queue),
    );

    assert_eq!(order(&queue), vec!["A"]);
    assert_eq!(report.invalid.len(), 1);
    assert_eq!(report.invalid[0].id.as_str(), "Suspnse-011-Hitch");
    assert_eq!(
        report.invalid[0].suggestion,
        Some(ShowId::new("Sus-011-Hitch"))
    );
    assert_eq!(
        report.buffer,
        "B\nSuspnse-011-Hitch # not in the archive, did you mean Sus-011-Hitch?"
    );
}

#[test]
fn test_foreign_id_gets_no_match() {
    let mut queue = QueueStore::new(archive());

    let report = rejected(Importer::new().import("totally-unrelated", &mut queue));

    assert_eq!(report.invalid[0].suggestion, None);
    assert_eq!(report.invalid[0].to_string(), "totally-unrelated -> no match");
    assert_eq!(report.buffer, "totally-unrelated # not in the archive");
}

#[test]
fn test_every_invalid_line_is_reported_in_order() {
    let mut queue = QueueStore::new(archive());

    let report = rejected(Importer::new().import("zzz\nA\nyyy\nzzz", &mut queue));

    let ids: Vec<&str> = report.invalid.iter().map(|line| line.id.as_str()).collect();
    assert_eq!(ids, vec!["zzz", "yyy"]);
    assert!(queue.is_empty());
}

#[test]
fn test_corrected_annotated_buffer_is_accepted() {
    let mut queue = QueueStore::new(archive());
    let importer = Importer::new();

    let report = rejected(importer.import("A\nSus-011-Hitc", &mut queue));
    // The user fixes the typo but leaves the annotation in place
    let fixed = report.buffer.replace("Sus-011-Hitc #", "Sus-011-Hitch #");

    importer.import(&fixed, &mut queue).unwrap();

    assert_eq!(order(&queue), vec!["A", "Sus-011-Hitch"]);
}

#[test]
fn test_custom_threshold_suppresses_suggestions() {
    let mut queue = QueueStore::new(archive());
    let strict = Importer::with_matcher(FuzzyMatcher::with_threshold(0.99));

    let report = rejected(strict.import("Suspnse-011-Hitch", &mut queue));

    assert_eq!(report.invalid[0].suggestion, None);
}

// ===== Properties =====

proptest! {
    /// Property: exporting and re-importing any queue reproduces it
    #[test]
    fn export_import_round_trip(picks in prop::collection::vec(0usize..5, 0..12)) {
        let catalogue = archive();
        let ids = catalogue.ids();
        let mut queue = QueueStore::new(Arc::clone(&catalogue));
        for n in picks {
            queue.add(&ids[n]).unwrap();
        }

        let mut other = QueueStore::new(catalogue);
        Importer::new().import(&export(&queue), &mut other).unwrap();

        prop_assert_eq!(other.ids(), queue.ids());
    }

    /// Property: a rejected import never changes the queue
    #[test]
    fn rejection_is_atomic(
        picks in prop::collection::vec(0usize..5, 0..8),
        junk in "[a-z]{3,12}"
    ) {
        let catalogue = archive();
        let ids = catalogue.ids();
        let mut queue = QueueStore::new(Arc::clone(&catalogue));
        for n in &picks {
            queue.add(&ids[*n]).unwrap();
        }
        let before = queue.ids();

        let text = format!("{}\n{}", export(&queue), junk);
        let result = Importer::new().import(&text, &mut queue);

        prop_assert!(matches!(result, Err(ImportError::Rejected(_))));
        prop_assert_eq!(before, queue.ids());
    }
}
