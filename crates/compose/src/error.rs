#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Wav(#[from] hound::Error),

    #[error("no audio clips to concatenate")]
    NoClips,

    #[error("only integer PCM audio is supported")]
    UnsupportedFormat,

    #[error("audio clip specs differ: expected {expected:?}, got {got:?}")]
    SpecMismatch {
        expected: hound::WavSpec,
        got: hound::WavSpec,
    },

    #[error("ffmpeg exited with {0}")]
    Ffmpeg(std::process::ExitStatus),
}
