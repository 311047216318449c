mod audio;
mod error;
mod srt;
mod video;

pub use audio::concat_wavs;
pub use error::Error;
pub use srt::write_srt;
pub use video::render_video;
