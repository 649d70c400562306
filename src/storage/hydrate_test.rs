use super::*;
use crate::db::MemoRecord;

fn record(inline: Option<Vec<u8>>, legacy: Option<Vec<u8>>) -> MemoRecord {
    MemoRecord {
        id: "m".to_string(),
        title: "t".to_string(),
        duration_secs: 1.0,
        created_at: 100,
        mime_type: "audio/webm".to_string(),
        inline_audio: inline,
        legacy_audio: legacy,
    }
}

#[test]
fn test_external_tier_wins() {
    let rec = record(Some(vec![2]), Some(vec![3]));

    let source = resolve_audio(&rec, Some(vec![1])).expect("should resolve");
    assert_eq!(source, AudioSource::External(vec![1]));
    assert_eq!(source.tier(), "blob store");
}

#[test]
fn test_inline_tier_when_no_external() {
    let rec = record(Some(vec![2]), Some(vec![3]));

    let source = resolve_audio(&rec, None).expect("should resolve");
    assert_eq!(source, AudioSource::Inline(vec![2]));
}

#[test]
fn test_legacy_tier_last() {
    let rec = record(None, Some(vec![3]));

    let source = resolve_audio(&rec, None).expect("should resolve");
    assert_eq!(source, AudioSource::Legacy(vec![3]));
    assert_eq!(source.tier(), "legacy");
}

#[test]
fn test_empty_external_falls_through() {
    let rec = record(Some(vec![2]), None);

    let source = resolve_audio(&rec, Some(Vec::new())).expect("should resolve");
    assert_eq!(source, AudioSource::Inline(vec![2]));
}

#[test]
fn test_empty_inline_falls_through() {
    let rec = record(Some(Vec::new()), Some(vec![3]));

    let source = resolve_audio(&rec, None).expect("should resolve");
    assert_eq!(source, AudioSource::Legacy(vec![3]));
}

#[test]
fn test_no_tier_is_none() {
    let rec = record(None, None);
    assert_eq!(resolve_audio(&rec, None), None);

    let rec = record(Some(Vec::new()), Some(Vec::new()));
    assert_eq!(resolve_audio(&rec, Some(Vec::new())), None);
}

#[test]
fn test_into_bytes() {
    assert_eq!(AudioSource::External(vec![1]).into_bytes(), vec![1]);
    assert_eq!(AudioSource::Inline(vec![2]).into_bytes(), vec![2]);
    assert_eq!(AudioSource::Legacy(vec![3]).into_bytes(), vec![3]);
}
