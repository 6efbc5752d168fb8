//! Import buffer text format
//!
//! One show identifier per line. Blank lines and horizontal whitespace carry
//! no meaning. Anything after [`ANNOTATION_MARKER`] is a note: the system
//! appends one to lines it rejected, and strips it again on the next parse.
//!
//! ```text
//! Sus-011-Hitch
//! Suspnse-011-Hitch # not in the archive, did you mean Sus-011-Hitch?
//! XMin-003-Nightfall
//! ```

use booth_core::ShowId;
use booth_playback::QueueStore;
use std::collections::HashSet;

/// Starts an annotation running to end of line
pub const ANNOTATION_MARKER: char = '#';

/// Note appended to every rejected line
pub const NOT_IN_ARCHIVE: &str = "not in the archive";

/// What a submitted buffer asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportRequest {
    /// Empty submission: empty the queue
    Clear,

    /// Replace the queue with these shows, in order, without duplicates
    Replace(Vec<ShowId>),
}

/// Queue as import text, head first
pub fn export(queue: &QueueStore) -> String {
    queue.export()
}

/// Parse a submitted buffer
pub fn parse_buffer(text: &str) -> ImportRequest {
    if text.trim().is_empty() {
        return ImportRequest::Clear;
    }

    let mut seen = HashSet::new();
    let ids = text
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.clone()))
        .map(ShowId::from)
        .collect();

    ImportRequest::Replace(ids)
}

/// Render a buffer line, annotating it when it was rejected
///
/// `suggestion` is only shown for rejected lines.
pub fn render_line(id: &ShowId, rejected: bool, suggestion: Option<&ShowId>) -> String {
    match (rejected, suggestion) {
        (false, _) => id.to_string(),
        (true, None) => format!("{} {} {}", id, ANNOTATION_MARKER, NOT_IN_ARCHIVE),
        (true, Some(suggested)) => format!(
            "{} {} {}, did you mean {}?",
            id, ANNOTATION_MARKER, NOT_IN_ARCHIVE, suggested
        ),
    }
}

/// Strip the annotation and every horizontal whitespace character
fn clean_line(line: &str) -> String {
    let content = match line.find(ANNOTATION_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    };
    content.chars().filter(|c| !c.is_whitespace()).collect()
}
