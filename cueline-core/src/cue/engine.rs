use crate::foundation::error::{CuelineError, CuelineResult};
use crate::foundation::time::Millis;
use crate::presentation::model::Node;
use crate::timeline::segment::{Segment, SegmentId, Timeline};

/// Cue pushed to subscribers as the playback clock moves.
///
/// Segment cues track which timeline segment currently covers the clock;
/// node cues track visibility-window membership of cue-linked nodes and carry
/// the transition length the UI layer should animate over.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CueEvent {
    /// The clock left a segment.
    SegmentExited {
        /// Segment that was left.
        id: SegmentId,
    },
    /// The clock entered a segment.
    SegmentEntered {
        /// Segment now covering the clock.
        id: SegmentId,
    },
    /// A node's window ended; hide it.
    NodeHidden {
        /// Cue-linked node id.
        node_id: String,
        /// Transition length the hide should animate over.
        transition_ms: u64,
    },
    /// A node's window began; show it.
    NodeShown {
        /// Cue-linked node id.
        node_id: String,
        /// Transition length the show should animate over.
        transition_ms: u64,
    },
}

#[derive(Clone, Debug)]
struct ControlledNode {
    id: String,
    enter: Millis,
    exit: Millis,
    transition_ms: u64,
}

/// Synchronous show/hide state machine over a derived timeline.
///
/// Fed playback clock updates, it emits [`CueEvent`]s for segment changes and
/// node visibility flips. Seeking needs no special handling: an update with a
/// non-monotonic clock diffs against the last observed state like any other.
#[derive(Debug)]
pub struct CueEngine {
    timeline: Timeline,
    nodes: Vec<ControlledNode>,
    visible: Vec<bool>,
    current: Option<usize>,
    started: bool,
}

impl CueEngine {
    /// Build an engine from a timeline and the cue-annotated tree, as
    /// returned by [`crate::derive_markers`].
    ///
    /// Fails with a validation error if the timeline does not satisfy its
    /// coverage invariants or if a node's cue links name segments the
    /// timeline does not contain (possible only for hand-assembled input).
    pub fn new(timeline: Timeline, root: &Node) -> CuelineResult<Self> {
        timeline.validate()?;

        let mut nodes = Vec::new();
        collect_controlled(root, &timeline, &mut nodes)?;
        let visible = vec![false; nodes.len()];

        Ok(Self {
            timeline,
            nodes,
            visible,
            current: None,
            started: false,
        })
    }

    /// Advance the playback clock and return the cues it triggers.
    ///
    /// Segment cues come first (exit before enter), then node cues in tree
    /// encounter order. The first update reports the initial state as
    /// entered/shown cues; nodes start hidden, so no hide cues are emitted
    /// for windows the clock is already outside of.
    #[tracing::instrument(skip(self), fields(now = now.0))]
    pub fn update(&mut self, now: Millis) -> Vec<CueEvent> {
        let mut events = Vec::new();

        let next = self.timeline.segment_index_at(now);
        if !self.started {
            if let Some(i) = next {
                events.push(CueEvent::SegmentEntered {
                    id: self.timeline.segments[i].id,
                });
            }
        } else if next != self.current {
            if let Some(i) = self.current {
                events.push(CueEvent::SegmentExited {
                    id: self.timeline.segments[i].id,
                });
            }
            if let Some(i) = next {
                events.push(CueEvent::SegmentEntered {
                    id: self.timeline.segments[i].id,
                });
            }
        }
        self.current = next;

        for (i, node) in self.nodes.iter().enumerate() {
            let show = node.enter <= now && now < node.exit;
            if show != self.visible[i] {
                if show {
                    events.push(CueEvent::NodeShown {
                        node_id: node.id.clone(),
                        transition_ms: node.transition_ms,
                    });
                } else {
                    events.push(CueEvent::NodeHidden {
                        node_id: node.id.clone(),
                        transition_ms: node.transition_ms,
                    });
                }
            }
            self.visible[i] = show;
        }

        self.started = true;
        events
    }

    /// Segment covering the last observed clock, if any.
    pub fn current_segment(&self) -> Option<&Segment> {
        self.current.map(|i| &self.timeline.segments[i])
    }

    /// Ids of the nodes visible at the last observed clock, in tree order.
    pub fn visible_nodes(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .zip(&self.visible)
            .filter(|&(_, &v)| v)
            .map(|(n, _)| n.id.as_str())
            .collect()
    }
}

fn collect_controlled(
    node: &Node,
    timeline: &Timeline,
    out: &mut Vec<ControlledNode>,
) -> CuelineResult<()> {
    if let Some(links) = node.cues {
        let enter = resolve_timestamp(timeline, links.enter, &node.id)?;
        let exit = resolve_timestamp(timeline, links.exit, &node.id)?;
        out.push(ControlledNode {
            id: node.id.clone(),
            enter,
            exit,
            transition_ms: node.transition_ms,
        });
    }
    for child in &node.children {
        collect_controlled(child, timeline, out)?;
    }
    Ok(())
}

fn resolve_timestamp(timeline: &Timeline, id: SegmentId, node_id: &str) -> CuelineResult<Millis> {
    let SegmentId::Timestamp(t) = id else {
        return Err(CuelineError::validation(format!(
            "node '{node_id}' cue link '{id}' is not a timestamp segment"
        )));
    };
    if !timeline.segments.iter().any(|seg| seg.id == id) {
        return Err(CuelineError::validation(format!(
            "node '{node_id}' cue link '{id}' is missing from the timeline"
        )));
    }
    Ok(t)
}

#[cfg(test)]
#[path = "../../tests/unit/cue/engine.rs"]
mod tests;
