#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Wav(#[from] hound::Error),

    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(u32),

    #[error("synthesized audio contains no frames")]
    EmptyAudio,
}
