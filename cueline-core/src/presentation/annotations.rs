use crate::foundation::error::CuelineResult;
use crate::foundation::time::{Millis, parse_timecode};
use crate::presentation::model::Node;

/// Lead-in applied when seeking to an annotation, so playback picks up the
/// surrounding context rather than the exact first word.
pub const SEEK_LEAD: Millis = Millis(2000);

/// A sidebar annotation: a titled note visible during a timecoded window.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// Window start.
    pub start: Millis,
    /// Window end.
    pub end: Millis,
    /// Heading shown in the annotation list.
    pub title: String,
    /// Body text (links, notes).
    pub body: String,
}

impl Annotation {
    /// Build an annotation from timecoded bounds (`MM:SS` or `HH:MM:SS`).
    pub fn parse(
        start: &str,
        end: &str,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> CuelineResult<Self> {
        Ok(Self {
            start: parse_timecode(start)?,
            end: parse_timecode(end)?,
            title: title.into(),
            body: body.into(),
        })
    }

    /// Playback target when the annotation is activated.
    pub fn seek_target(&self) -> Millis {
        self.start.saturating_sub(SEEK_LEAD)
    }
}

/// Build the timed presentation subtree for an annotation list.
///
/// The container node is untimed; each annotation becomes one timed child
/// whose window is the annotation's `[start, end)`. Child ids are
/// `{prefix}/{index}`.
pub fn annotation_tree(annotations: &[Annotation], id_prefix: &str) -> Node {
    let children = annotations
        .iter()
        .enumerate()
        .map(|(i, a)| Node::timed(format!("{id_prefix}/{i}"), Some(a.start), a.end))
        .collect();
    Node::new(id_prefix).with_children(children)
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/annotations.rs"]
mod tests;
