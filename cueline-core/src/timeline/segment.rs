use crate::foundation::error::{CuelineError, CuelineResult};
use crate::foundation::time::Millis;

/// Content-addressed identity of a timeline segment.
///
/// An id is a pure function of the segment kind and its boundary time(s),
/// never a counter. Two timed nodes sharing an instant therefore name the
/// same timestamp segment, which is what makes deduplication work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// Zero-width marker at a discrete enter or exit instant.
    Timestamp(Millis),
    /// Gap between two consecutive timestamps.
    Filler(Millis, Millis),
    /// Terminal gap from the last timestamp to the presentation end.
    Duration,
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentId::Timestamp(t) => write!(f, "timestamp/{t}"),
            SegmentId::Filler(a, b) => write!(f, "filler/{a}/{b}"),
            SegmentId::Duration => write!(f, "duration"),
        }
    }
}

impl std::str::FromStr for SegmentId {
    type Err = CuelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CuelineError::serde(format!("invalid segment id '{s}'"));

        if s == "duration" {
            return Ok(SegmentId::Duration);
        }
        if let Some(t) = s.strip_prefix("timestamp/") {
            let t = t.parse::<u64>().map_err(|_| invalid())?;
            return Ok(SegmentId::Timestamp(Millis(t)));
        }
        if let Some(rest) = s.strip_prefix("filler/")
            && let Some((a, b)) = rest.split_once('/')
        {
            let a = a.parse::<u64>().map_err(|_| invalid())?;
            let b = b.parse::<u64>().map_err(|_| invalid())?;
            return Ok(SegmentId::Filler(Millis(a), Millis(b)));
        }
        Err(invalid())
    }
}

impl serde::Serialize for SegmentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for SegmentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Identified interval on the global timeline.
///
/// Timestamps are zero-width (`start == end`); fillers span the gap between
/// two timestamps. `start > end` can only occur in the terminal segment of a
/// timeline whose configured duration is shorter than its last timestamp;
/// derivation surfaces that case instead of special-casing it, and
/// [`Timeline::validate`] rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Content-addressed segment identity.
    pub id: SegmentId,
    /// Interval start on the presentation clock.
    pub start: Millis,
    /// Interval end on the presentation clock.
    pub end: Millis,
}

/// Ordered, gap-free sequence of segments covering `[0, duration]`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Total presentation length.
    pub duration: Millis,
    /// Segments in playback order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Validate coverage invariants: contiguity, `[0, duration]` bounds,
    /// non-negative segment lengths, and unique segment ids.
    pub fn validate(&self) -> CuelineResult<()> {
        let Some(first) = self.segments.first() else {
            return Err(CuelineError::validation("timeline has no segments"));
        };
        if first.start != Millis::ZERO {
            return Err(CuelineError::validation("first segment must start at 0"));
        }
        if let Some(last) = self.segments.last()
            && last.end != self.duration
        {
            return Err(CuelineError::validation(format!(
                "last segment ends at {} but duration is {}",
                last.end, self.duration
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for pair in self.segments.windows(2) {
            if pair[0].end != pair[1].start {
                return Err(CuelineError::validation(format!(
                    "gap between '{}' and '{}'",
                    pair[0].id, pair[1].id
                )));
            }
        }
        for seg in &self.segments {
            if seg.start > seg.end {
                return Err(CuelineError::validation(format!(
                    "segment '{}' has start > end",
                    seg.id
                )));
            }
            if !seen.insert(seg.id) {
                return Err(CuelineError::validation(format!(
                    "duplicate segment id '{}'",
                    seg.id
                )));
            }
        }

        Ok(())
    }

    /// Index of the segment covering `t`, if any.
    ///
    /// Timestamps match their instant exactly and win over the filler that
    /// starts at the same time; fillers cover the half-open `[start, end)`.
    /// `t == duration` (and beyond) is not covered.
    pub fn segment_index_at(&self, t: Millis) -> Option<usize> {
        self.segments.iter().position(|seg| {
            if seg.start == seg.end {
                t == seg.start
            } else {
                seg.start <= t && t < seg.end
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segment.rs"]
mod tests;
