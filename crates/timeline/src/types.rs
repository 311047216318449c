/// Where a segment sits in the script's dramatic arc.
///
/// The role never changes timing math; it only selects the caption cadence
/// (see [`CadencePolicy`]) and travels with every chunk so downstream
/// renderers can style hooks differently from body lines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SegmentRole {
    Hook,
    Line,
    Closer,
}

/// One narrated unit with its measured audio duration.
///
/// `duration_ms` comes from the actual rendered audio, never from a text
/// heuristic. Negative values are invalid and rejected at placement time.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub role: SegmentRole,
    pub text: String,
    pub duration_ms: i64,
}

/// A segment placed on the shared narration timeline.
///
/// Produced by [`crate::place::place_segments`]. Within one output sequence,
/// `start_ms` of each segment equals `end_ms` of the previous one and the
/// first segment starts at 0.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimedSegment {
    pub role: SegmentRole,
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimedSegment {
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

/// One caption display window: show `text` during `[start_ms, end_ms)`.
///
/// Chunks derived from a single segment partition that segment's interval
/// contiguously and concatenate back to its word sequence in order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CaptionChunk {
    pub role: SegmentRole,
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// Words-per-chunk bounds by role.
///
/// Hooks and closers get slightly larger groups so their punch lines stay
/// together on screen; body lines turn over faster.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct CadencePolicy {
    pub hook_closer: usize,
    pub line: usize,
}

impl CadencePolicy {
    pub fn new(hook_closer: usize, line: usize) -> Self {
        Self { hook_closer, line }
    }

    pub fn words_for(&self, role: SegmentRole) -> usize {
        match role {
            SegmentRole::Hook | SegmentRole::Closer => self.hook_closer,
            SegmentRole::Line => self.line,
        }
    }
}

impl Default for CadencePolicy {
    fn default() -> Self {
        Self::new(4, 3)
    }
}
