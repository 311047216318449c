use std::io::Cursor;

use crate::error::Error;

/// Measure the duration of an in-memory WAV render in whole milliseconds.
///
/// Only the header and frame count are read; samples are never decoded.
/// Zero-frame audio is rejected so a silent synthesis failure cannot enter
/// the timeline as a zero-length segment.
pub fn wav_duration_ms(wav: &[u8]) -> Result<i64, Error> {
    let reader = hound::WavReader::new(Cursor::new(wav))?;
    let spec = reader.spec();

    if spec.sample_rate == 0 {
        return Err(Error::InvalidSampleRate(spec.sample_rate));
    }

    let frames = reader.duration() as i64;
    if frames == 0 {
        return Err(Error::EmptyAudio);
    }

    Ok(frames * 1000 / spec.sample_rate as i64)
}

#[cfg(test)]
pub(crate) mod test_wav {
    pub fn mono_16k(samples: &[i16]) -> Vec<u8> {
        with_spec(16_000, 1, samples)
    }

    pub fn with_spec(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = std::io::Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_of_half_a_second_at_16k() {
        let wav = test_wav::mono_16k(&vec![0i16; 8_000]);
        assert_eq!(wav_duration_ms(&wav).unwrap(), 500);
    }

    #[test]
    fn duration_counts_frames_not_samples() {
        // 8000 interleaved stereo samples = 4000 frames = 250ms at 16kHz.
        let wav = test_wav::with_spec(16_000, 2, &vec![0i16; 8_000]);
        assert_eq!(wav_duration_ms(&wav).unwrap(), 250);
    }

    #[test]
    fn sub_millisecond_remainder_is_floored() {
        // 1500 frames at 16kHz is 93.75ms.
        let wav = test_wav::mono_16k(&vec![0i16; 1_500]);
        assert_eq!(wav_duration_ms(&wav).unwrap(), 93);
    }

    #[test]
    fn zero_frames_is_rejected() {
        let wav = test_wav::mono_16k(&[]);
        assert!(matches!(wav_duration_ms(&wav), Err(Error::EmptyAudio)));
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        let mut wav = test_wav::mono_16k(&vec![0i16; 100]);
        // fmt chunk: sample rate at 24..28, byte rate at 28..32
        wav[24..32].fill(0);

        let err = wav_duration_ms(&wav).unwrap_err();
        assert!(matches!(err, Error::InvalidSampleRate(0)));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = wav_duration_ms(b"definitely not a wav file").unwrap_err();
        assert!(matches!(err, Error::Wav(_)));
    }
}
