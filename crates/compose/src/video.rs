use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Render the final vertical video with a single ffmpeg invocation.
///
/// Scales the background to 1080x1920, burns the SRT captions in, muxes the
/// narration track, and stops at the shorter stream so a long background
/// loop does not outrun the story. Encoding fidelity knobs stay out of
/// scope; this is deliberately the plainest command that produces a short.
///
/// The subtitles filter takes the path unescaped, so `subtitles` must not
/// contain quotes or colons.
pub fn render_video(
    background: &Path,
    narration: &Path,
    subtitles: &Path,
    out: &Path,
) -> Result<(), Error> {
    let filter = format!(
        "scale=1080:1920,subtitles={}:force_style='Fontsize=28,OutlineColour=&H000000&,Outline=3,Shadow=0'",
        subtitles.display()
    );

    tracing::info!(
        background = %background.display(),
        out = %out.display(),
        "ffmpeg_render_started"
    );

    let status = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(background)
        .arg("-i")
        .arg(narration)
        .arg("-vf")
        .arg(&filter)
        .args(["-map", "0:v:0", "-map", "1:a:0"])
        .args(["-c:v", "libx264", "-c:a", "aac"])
        .args(["-r", "60", "-shortest"])
        .arg(out)
        .status()?;

    if !status.success() {
        tracing::error!(status = %status, "ffmpeg_render_failed");
        return Err(Error::Ffmpeg(status));
    }

    tracing::info!(out = %out.display(), "ffmpeg_render_finished");
    Ok(())
}
