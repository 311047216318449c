use crate::chunk::chunk_segment;
use crate::error::Error;
use crate::place::place_segments;
use crate::types::{CadencePolicy, CaptionChunk, Segment};

/// Build the flat caption timeline for an ordered segment sequence.
///
/// Places every segment end to end from 0, chunks each one with the
/// role-appropriate words-per-chunk bound from `policy`, and concatenates the
/// per-segment chunk runs in segment order. The result is time-ordered and
/// gapless across segment boundaries. Any validation failure aborts the whole
/// call; partial timelines are never returned.
pub fn build_timeline(
    segments: &[Segment],
    policy: CadencePolicy,
) -> Result<Vec<CaptionChunk>, Error> {
    let placed = place_segments(segments)?;

    let mut chunks = Vec::new();
    for segment in &placed {
        chunks.extend(chunk_segment(segment, policy.words_for(segment.role))?);
    }

    Ok(chunks)
}
