use super::*;

fn contiguous_timeline() -> Timeline {
    Timeline {
        duration: Millis(10_000),
        segments: vec![
            Segment {
                id: SegmentId::Timestamp(Millis::ZERO),
                start: Millis::ZERO,
                end: Millis::ZERO,
            },
            Segment {
                id: SegmentId::Filler(Millis::ZERO, Millis(1000)),
                start: Millis::ZERO,
                end: Millis(1000),
            },
            Segment {
                id: SegmentId::Timestamp(Millis(1000)),
                start: Millis(1000),
                end: Millis(1000),
            },
            Segment {
                id: SegmentId::Duration,
                start: Millis(1000),
                end: Millis(10_000),
            },
        ],
    }
}

#[test]
fn id_display_forms_are_stable() {
    assert_eq!(SegmentId::Timestamp(Millis(1000)).to_string(), "timestamp/1000");
    assert_eq!(
        SegmentId::Filler(Millis::ZERO, Millis(1000)).to_string(),
        "filler/0/1000"
    );
    assert_eq!(SegmentId::Duration.to_string(), "duration");
}

#[test]
fn id_parse_round_trips() {
    for id in [
        SegmentId::Timestamp(Millis::ZERO),
        SegmentId::Timestamp(Millis(5000)),
        SegmentId::Filler(Millis(1000), Millis(5000)),
        SegmentId::Duration,
    ] {
        assert_eq!(id.to_string().parse::<SegmentId>().unwrap(), id);
    }

    for bad in ["", "stamp/3", "timestamp/x", "filler/1", "filler/a/b"] {
        assert!(bad.parse::<SegmentId>().is_err(), "expected error for '{bad}'");
    }
}

#[test]
fn id_serde_uses_string_form() {
    let id = SegmentId::Filler(Millis::ZERO, Millis(1000));
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"filler/0/1000\"");
    assert_eq!(serde_json::from_str::<SegmentId>(&json).unwrap(), id);
}

#[test]
fn validate_accepts_contiguous_coverage() {
    contiguous_timeline().validate().unwrap();
}

#[test]
fn validate_rejects_gaps() {
    let mut tl = contiguous_timeline();
    tl.segments[3].start = Millis(2000);
    assert!(tl.validate().is_err());
}

#[test]
fn validate_rejects_duplicate_ids() {
    let mut tl = contiguous_timeline();
    tl.segments[2].id = SegmentId::Timestamp(Millis::ZERO);
    assert!(tl.validate().is_err());
}

#[test]
fn validate_rejects_negative_length_terminal() {
    let mut tl = contiguous_timeline();
    tl.duration = Millis(500);
    tl.segments[3].end = Millis(500);
    assert!(tl.validate().is_err());
}

#[test]
fn segment_index_at_prefers_timestamps_over_adjacent_fillers() {
    let tl = contiguous_timeline();
    assert_eq!(tl.segment_index_at(Millis::ZERO), Some(0));
    assert_eq!(tl.segment_index_at(Millis(500)), Some(1));
    assert_eq!(tl.segment_index_at(Millis(1000)), Some(2));
    assert_eq!(tl.segment_index_at(Millis(1001)), Some(3));
    assert_eq!(tl.segment_index_at(Millis(10_000)), None);
    assert_eq!(tl.segment_index_at(Millis(99_999)), None);
}
