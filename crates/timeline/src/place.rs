use crate::error::Error;
use crate::types::{Segment, TimedSegment};

/// Place segments end to end on a shared timeline starting at 0.
///
/// Each output interval is exactly as long as the segment's measured
/// `duration_ms`, and consecutive intervals share a boundary, so the result
/// is gapless and overlap-free by construction. Input order is preserved.
///
/// A negative duration fails the whole call with
/// [`Error::InvalidSegmentDuration`]; zero is valid and yields an empty
/// interval that still carries the segment's text.
pub fn place_segments(segments: &[Segment]) -> Result<Vec<TimedSegment>, Error> {
    let mut placed = Vec::with_capacity(segments.len());
    let mut cursor = 0i64;

    for seg in segments {
        if seg.duration_ms < 0 {
            return Err(Error::InvalidSegmentDuration {
                text: seg.text.clone(),
                duration_ms: seg.duration_ms,
            });
        }

        let start_ms = cursor;
        cursor += seg.duration_ms;

        placed.push(TimedSegment {
            role: seg.role,
            text: seg.text.clone(),
            start_ms,
            end_ms: cursor,
        });
    }

    Ok(placed)
}
