//! Integration tests for caption track loading from files.

use chrono::{DateTime, Utc};
use tempo::captions::{parse_instant, CaptionTrack};

use super::helpers::fixture;

fn at(s: &str) -> DateTime<Utc> {
    parse_instant(s).unwrap()
}

#[test]
fn loads_the_debate_excerpt() {
    let track = CaptionTrack::load(fixture("debate_excerpt.json")).unwrap();
    assert_eq!(track.len(), 6);
    assert_eq!(
        track.records()[4].speaker.as_deref(),
        Some("President Obama")
    );
}

#[test]
fn bounds_span_the_whole_transcript() {
    let track = CaptionTrack::load(fixture("debate_excerpt.json")).unwrap();
    let (start, end) = track.bounds().unwrap();
    assert_eq!(start, at("2012-10-04T09:03:00-05:00"));
    assert_eq!(end, at("2012-10-04T09:07:52-05:00"));
}

#[test]
fn lookup_mid_record_finds_the_speaker() {
    let track = CaptionTrack::load(fixture("debate_excerpt.json")).unwrap();
    let c = track.caption_at(at("2012-10-04T09:03:10-05:00")).unwrap();
    assert!(c.text.contains("Magness Arena"));
}

#[test]
fn lookup_at_record_boundary_matches_neither_neighbor() {
    // 09:03:22 is where record 1 ends and record 2 begins; the strict
    // comparisons exclude it from both.
    let track = CaptionTrack::load(fixture("debate_excerpt.json")).unwrap();
    assert!(track.caption_at(at("2012-10-04T09:03:22-05:00")).is_none());
}

#[test]
fn lookup_in_a_transcript_gap_finds_nothing() {
    // Nothing is recorded between 09:03:50 and 09:05:44
    let track = CaptionTrack::load(fixture("debate_excerpt.json")).unwrap();
    assert!(track.caption_at(at("2012-10-04T09:04:30-05:00")).is_none());
}

#[test]
fn load_of_missing_file_fails_with_path_context() {
    let result = CaptionTrack::load(fixture("does_not_exist.json"));
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("does_not_exist.json"));
}
