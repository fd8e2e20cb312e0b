//! Cueline derives gap-free cue timelines for annotated, segmented video
//! presentations.
//!
//! A presentation is a tree of nodes, some of which carry an enter/exit time
//! window on the global playback clock. Cueline turns that tree into the
//! segment list a playback engine needs to orchestrate visibility, and into
//! the event stream a UI layer subscribes to.
//!
//! # Pipeline overview
//!
//! 1. **Model**: [`Presentation`] is a pure data model (buildable in code,
//!    serializable via Serde as JSON).
//! 2. **Derive**: [`derive_markers`] walks the tree and produces a contiguous
//!    [`Timeline`] of segments covering the whole duration, plus a clone of
//!    the tree in which every timed node is linked to its enter/exit segments.
//! 3. **Cue**: [`CueEngine`] consumes the pair and converts playback clock
//!    updates into "segment entered/exited" and "node shown/hidden" events.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: derivation is pure and stable for a given
//!   input; segment identities are content-addressed from their boundary
//!   times, never counters.
//! - **No IO in the core**: loading presentation JSON from disk is the
//!   caller's concern (see the `cueline` CLI crate).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cue;
mod foundation;
mod presentation;
mod timeline;

pub use cue::engine::{CueEngine, CueEvent};
pub use foundation::error::{CuelineError, CuelineResult};
pub use foundation::time::{Millis, parse_timecode};
pub use presentation::annotations::{Annotation, SEEK_LEAD, annotation_tree};
pub use presentation::model::{CueLinks, Node, Presentation};
pub use timeline::derive::derive_markers;
pub use timeline::segment::{Segment, SegmentId, Timeline};
