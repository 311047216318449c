#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("segment duration must be non-negative, got {duration_ms}ms for \"{text}\"")]
    InvalidSegmentDuration { text: String, duration_ms: i64 },

    #[error("words_per_chunk must be at least 1")]
    InvalidChunkSize,
}
