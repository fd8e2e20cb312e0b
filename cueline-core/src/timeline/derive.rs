use crate::foundation::time::Millis;
use crate::presentation::model::{CueLinks, Node};
use crate::timeline::segment::{Segment, SegmentId, Timeline};

/// Derive the cue timeline for a presentation tree.
///
/// Walks the tree depth-first in pre-order, collecting a timestamp at the
/// enter and exit instant of every timed node, then folds the sorted
/// timestamps into a contiguous segment list covering `[0, duration]`:
/// duplicate instants collapse to one timestamp segment, every gap between
/// consecutive timestamps becomes a filler segment, and a distinct terminal
/// segment runs from the last timestamp to `duration`.
///
/// Returns the timeline together with a structural clone of the tree in which
/// every timed node carries [`CueLinks`] naming its two timestamp segments.
/// The input tree is never mutated.
///
/// Pure and total: inputs are already well-formed integer milliseconds, so
/// there is no failure path. A `duration` shorter than the last timestamp
/// yields a terminal segment with `start > end`; that degenerate case is
/// surfaced as-is and left to [`Timeline::validate`] to reject.
#[tracing::instrument(skip(root), fields(duration = duration.0))]
pub fn derive_markers(root: &Node, duration: Millis) -> (Timeline, Node) {
    let mut instants = Vec::new();
    let annotated = collect_markers(root, &mut instants);
    instants.sort();

    let mut last = Segment {
        id: SegmentId::Timestamp(Millis::ZERO),
        start: Millis::ZERO,
        end: Millis::ZERO,
    };
    let mut segments = vec![last];

    for at in instants {
        let id = SegmentId::Timestamp(at);
        // An enter/exit coincidence names the segment we already emitted.
        if id == last.id {
            continue;
        }
        segments.push(Segment {
            id: SegmentId::Filler(last.end, at),
            start: last.end,
            end: at,
        });
        let stamp = Segment { id, start: at, end: at };
        segments.push(stamp);
        last = stamp;
    }

    segments.push(Segment {
        id: SegmentId::Duration,
        start: last.end,
        end: duration,
    });

    tracing::debug!(segments = segments.len(), "derived timeline");
    (Timeline { duration, segments }, annotated)
}

/// Clone `node` with cue linkage filled in, pushing its own timestamp
/// instants before its children's (encounter order).
fn collect_markers(node: &Node, instants: &mut Vec<Millis>) -> Node {
    let cues = node.exit.map(|exit| {
        let enter = node.enter_or_default();
        instants.push(enter);
        instants.push(exit);
        CueLinks {
            enter: SegmentId::Timestamp(enter),
            exit: SegmentId::Timestamp(exit),
        }
    });

    Node {
        id: node.id.clone(),
        enter: node.enter,
        exit: node.exit,
        transition_ms: node.transition_ms,
        children: node
            .children
            .iter()
            .map(|child| collect_markers(child, instants))
            .collect(),
        cues,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/derive.rs"]
mod tests;
