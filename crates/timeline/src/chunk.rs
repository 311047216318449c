use crate::error::Error;
use crate::types::{CaptionChunk, TimedSegment};

/// Split one placed segment into caption chunks of at most `words_per_chunk`
/// words, dividing the segment's time window into equal whole-millisecond
/// shares.
///
/// Words are whitespace-delimited; each chunk's text is its word group joined
/// with single spaces, so concatenating chunk texts in order reproduces the
/// segment's words. Every chunk gets the same time share regardless of how
/// many words it holds: `ceil(window / chunk_count)`, with boundaries clamped
/// to the window. The final chunk ends exactly at the segment's `end_ms` and
/// absorbs the rounding remainder.
///
/// A segment with no words yields a single chunk spanning the whole window
/// with its text unchanged. A zero-length window yields zero-length chunks
/// that still partition the words.
pub fn chunk_segment(
    segment: &TimedSegment,
    words_per_chunk: usize,
) -> Result<Vec<CaptionChunk>, Error> {
    if words_per_chunk == 0 {
        return Err(Error::InvalidChunkSize);
    }

    let words: Vec<&str> = segment.text.split_whitespace().collect();
    if words.is_empty() {
        return Ok(vec![CaptionChunk {
            role: segment.role,
            text: segment.text.clone(),
            start_ms: segment.start_ms,
            end_ms: segment.end_ms,
        }]);
    }

    let groups: Vec<String> = words
        .chunks(words_per_chunk)
        .map(|group| group.join(" "))
        .collect();

    // hand-built inverted intervals degrade to zero-length chunks
    let total_ms = segment.duration_ms().max(0) as u64;
    let share = total_ms.div_ceil(groups.len() as u64);

    let chunks = groups
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let lo = (i as u64 * share).min(total_ms) as i64;
            let hi = ((i as u64 + 1) * share).min(total_ms) as i64;
            CaptionChunk {
                role: segment.role,
                text,
                start_ms: segment.start_ms + lo,
                end_ms: segment.start_ms + hi,
            }
        })
        .collect();

    Ok(chunks)
}
