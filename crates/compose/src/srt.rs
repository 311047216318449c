use std::io::Write;

use reel_timeline::CaptionChunk;

use crate::error::Error;

/// Render caption chunks as an SRT document.
///
/// One entry per chunk, numbered from 1, shown during `[start_ms, end_ms)`.
/// An empty chunk list produces an empty document.
pub fn write_srt<W: Write>(chunks: &[CaptionChunk], mut out: W) -> Result<(), Error> {
    for (i, chunk) in chunks.iter().enumerate() {
        writeln!(out, "{}", i + 1)?;
        writeln!(
            out,
            "{} --> {}",
            format_srt_time(chunk.start_ms),
            format_srt_time(chunk.end_ms)
        )?;
        writeln!(out, "{}", chunk.text)?;
        writeln!(out)?;
    }
    Ok(())
}

fn format_srt_time(ms: i64) -> String {
    let ms = ms.max(0);
    let millis = ms % 1000;
    let total_sec = ms / 1000;
    let s = total_sec % 60;
    let total_min = total_sec / 60;
    let m = total_min % 60;
    let h = total_min / 60;
    format!("{h:02}:{m:02}:{s:02},{millis:03}")
}
