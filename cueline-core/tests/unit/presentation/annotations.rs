use super::*;

#[test]
fn parse_builds_window_from_timecodes() {
    let a = Annotation::parse("15:45", "17:15", "Porter Bridges", "notes").unwrap();
    assert_eq!(a.start, Millis(945_000));
    assert_eq!(a.end, Millis(1_035_000));
    assert_eq!(a.title, "Porter Bridges");
}

#[test]
fn parse_propagates_timecode_errors() {
    assert!(Annotation::parse("nope", "17:15", "t", "b").is_err());
    assert!(Annotation::parse("15:45", "17:xx", "t", "b").is_err());
}

#[test]
fn seek_target_applies_lead() {
    let a = Annotation::parse("15:45", "17:15", "t", "b").unwrap();
    assert_eq!(a.seek_target(), Millis(943_000));

    // Near the start the lead clamps at zero instead of underflowing.
    let early = Annotation::parse("0:01", "0:10", "t", "b").unwrap();
    assert_eq!(early.seek_target(), Millis::ZERO);
}

#[test]
fn annotation_tree_builds_timed_children() {
    let annotations = vec![
        Annotation::parse("0:10", "0:20", "first", "").unwrap(),
        Annotation::parse("1:00", "2:00", "second", "").unwrap(),
    ];
    let tree = annotation_tree(&annotations, "blocks");

    assert!(!tree.is_timed());
    assert_eq!(tree.id, "blocks");
    assert_eq!(tree.children.len(), 2);

    assert_eq!(tree.children[0].id, "blocks/0");
    assert_eq!(tree.children[0].enter, Some(Millis(10_000)));
    assert_eq!(tree.children[0].exit, Some(Millis(20_000)));

    assert_eq!(tree.children[1].id, "blocks/1");
    assert_eq!(tree.children[1].enter, Some(Millis(60_000)));
    assert_eq!(tree.children[1].exit, Some(Millis(120_000)));
}
