use crate::foundation::error::{CuelineError, CuelineResult};
use crate::foundation::time::Millis;
use crate::timeline::segment::SegmentId;

/// A complete presentation.
///
/// A presentation is a pure data model that can be:
/// - built programmatically (see [`Node`] constructors and
///   [`crate::annotation_tree`])
/// - serialized/deserialized via Serde (JSON)
///
/// Deriving the cue timeline for a presentation is performed by
/// [`crate::derive_markers`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Presentation {
    /// Total presentation length in milliseconds.
    pub duration: Millis,
    /// Root of the presentation tree.
    pub root: Node,
}

/// An element in the presentation tree.
///
/// A node with a set `exit` is *timed*: it should be visible only within its
/// `[enter, exit)` window. `exit` presence is the sole trigger; an unset
/// `enter` defaults to the start of the presentation. Children are walked
/// independently of their parent's timed status.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Stable node identifier used by cue events.
    pub id: String,
    /// Window start; defaults to 0 when unset on a timed node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter: Option<Millis>,
    /// Window end; its presence makes the node timed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<Millis>,
    /// Show/hide transition length in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Linkage to the node's enter/exit timestamp segments.
    ///
    /// Derivation output only: always `None` on input trees, and set on every
    /// timed node of the tree returned by [`crate::derive_markers`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cues: Option<CueLinks>,
}

fn default_transition_ms() -> u64 {
    300
}

/// Linkage from a timed node to its enter/exit timestamp segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CueLinks {
    /// Segment the node becomes visible at.
    pub enter: SegmentId,
    /// Segment the node is hidden at.
    pub exit: SegmentId,
}

impl Node {
    /// Build an untimed node with no children.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enter: None,
            exit: None,
            transition_ms: default_transition_ms(),
            children: Vec::new(),
            cues: None,
        }
    }

    /// Build a timed node with no children.
    pub fn timed(id: impl Into<String>, enter: Option<Millis>, exit: Millis) -> Self {
        Self {
            enter,
            exit: Some(exit),
            ..Self::new(id)
        }
    }

    /// Attach children, consuming and returning the node.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Whether the node carries a visibility window.
    pub fn is_timed(&self) -> bool {
        self.exit.is_some()
    }

    /// Window start, defaulting to the start of the presentation.
    pub fn enter_or_default(&self) -> Millis {
        self.enter.unwrap_or(Millis::ZERO)
    }
}

impl Presentation {
    /// Validate presentation invariants.
    ///
    /// Derivation itself never validates (it assumes well-formed input, per
    /// its contract); this is the opt-in boundary check for caller-supplied
    /// data. Timed windows with `exit < enter` and windows reaching past
    /// `duration` are rejected here.
    pub fn validate(&self) -> CuelineResult<()> {
        if self.duration == Millis::ZERO {
            return Err(CuelineError::validation("duration must be > 0 ms"));
        }
        validate_node(&self.root, self.duration)
    }
}

fn validate_node(node: &Node, duration: Millis) -> CuelineResult<()> {
    if node.id.trim().is_empty() {
        return Err(CuelineError::validation("node id must be non-empty"));
    }
    if let Some(exit) = node.exit {
        if exit < node.enter_or_default() {
            return Err(CuelineError::validation(format!(
                "node '{}' has exit before enter",
                node.id
            )));
        }
        if exit > duration {
            return Err(CuelineError::validation(format!(
                "node '{}' window exceeds presentation duration",
                node.id
            )));
        }
    }
    for child in &node.children {
        validate_node(child, duration)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/model.rs"]
mod tests;
