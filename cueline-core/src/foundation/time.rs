use crate::foundation::error::{CuelineError, CuelineResult};

/// Instant or span on the global presentation clock, in integer milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// The start of the presentation clock.
    pub const ZERO: Millis = Millis(0);

    /// Subtract, clamping at zero. Used for lead-in seeks near the start.
    pub fn saturating_sub(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse an SMPTE-style timecode into milliseconds.
///
/// Accepts `MM:SS` and `HH:MM:SS` with non-negative integer parts. Anything
/// else is a [`CuelineError::Timecode`]; timecodes are the authoring-side
/// boundary, so malformed input is fatal here rather than defaulted.
pub fn parse_timecode(timecode: &str) -> CuelineResult<Millis> {
    let parts = timecode
        .split(':')
        .map(|p| {
            p.trim()
                .parse::<u64>()
                .map_err(|_| CuelineError::timecode(format!("invalid timecode '{timecode}'")))
        })
        .collect::<CuelineResult<Vec<u64>>>()?;

    let ms = match parts[..] {
        [minutes, seconds] => (minutes * 60 + seconds) * 1000,
        [hours, minutes, seconds] => ((hours * 60 + minutes) * 60 + seconds) * 1000,
        _ => {
            return Err(CuelineError::timecode(format!(
                "invalid timecode '{timecode}' (expected MM:SS or HH:MM:SS)"
            )));
        }
    };

    Ok(Millis(ms))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
