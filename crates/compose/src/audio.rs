use std::io::Cursor;

use crate::error::Error;

/// Concatenate WAV clips into one narration track, sample by sample.
///
/// Every clip must share the first clip's spec; a mismatch fails the whole
/// call rather than resampling, because per-clip durations have already been
/// measured and any rate conversion here would shift caption boundaries off
/// the audio. Integer PCM only.
pub fn concat_wavs(clips: &[Vec<u8>]) -> Result<Vec<u8>, Error> {
    let first = clips.first().ok_or(Error::NoClips)?;
    let spec = hound::WavReader::new(Cursor::new(first.as_slice()))?.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(Error::UnsupportedFormat);
    }

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;

    for clip in clips {
        let mut reader = hound::WavReader::new(Cursor::new(clip.as_slice()))?;
        let clip_spec = reader.spec();
        if clip_spec != spec {
            return Err(Error::SpecMismatch {
                expected: spec,
                got: clip_spec,
            });
        }

        for sample in reader.samples::<i32>() {
            writer.write_sample(sample?)?;
        }
    }

    writer.finalize()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    fn read_samples(bytes: &[u8]) -> Vec<i16> {
        hound::WavReader::new(Cursor::new(bytes))
            .unwrap()
            .samples::<i16>()
            .map(|s| s.unwrap())
            .collect()
    }

    #[test]
    fn concatenation_is_sample_accurate() {
        let a = wav(16_000, &[1, 2, 3]);
        let b = wav(16_000, &[4, 5]);

        let combined = concat_wavs(&[a, b]).unwrap();
        assert_eq!(read_samples(&combined), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn durations_are_additive() {
        let a = wav(16_000, &vec![0i16; 8_000]);
        let b = wav(16_000, &vec![0i16; 4_000]);

        let combined = concat_wavs(&[a, b]).unwrap();
        let reader = hound::WavReader::new(Cursor::new(combined.as_slice())).unwrap();
        assert_eq!(reader.duration(), 12_000);
        assert_eq!(reader.spec().sample_rate, 16_000);
    }

    #[test]
    fn single_clip_round_trips() {
        let a = wav(22_050, &[7, 8, 9]);
        let combined = concat_wavs(std::slice::from_ref(&a)).unwrap();
        assert_eq!(read_samples(&combined), read_samples(&a));
    }

    #[test]
    fn mismatched_specs_are_rejected() {
        let a = wav(16_000, &[1, 2]);
        let b = wav(44_100, &[3, 4]);

        let err = concat_wavs(&[a, b]).unwrap_err();
        assert!(matches!(err, Error::SpecMismatch { .. }));
    }

    #[test]
    fn float_pcm_is_rejected() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16_000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        writer.write_sample(0.25f32).unwrap();
        writer.finalize().unwrap();

        let err = concat_wavs(&[cursor.into_inner()]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(concat_wavs(&[]), Err(Error::NoClips)));
    }
}
