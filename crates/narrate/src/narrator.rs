use reel_scriptwriter::Script;
use reel_timeline::Segment;

use crate::audio::wav_duration_ms;
use crate::client::SpeechClient;
use crate::error::Error;

/// One narrated script unit: the segment that enters the timeline and the
/// WAV render that backs it.
///
/// The pairing is the invariant that keeps captions honest: `duration_ms`
/// inside `segment` was measured from exactly the bytes in `wav`, so the
/// audio placed on the track and the timing used for captions cannot
/// disagree.
#[derive(Debug, Clone)]
pub struct NarratedUnit {
    pub segment: Segment,
    pub wav: Vec<u8>,
}

/// Walks a script in narration order and synthesizes each unit once.
///
/// Synthesis is sequential; unit order in the output matches
/// [`Script::units`]. Any failure aborts the walk and nothing is returned.
pub struct Narrator {
    speech: SpeechClient,
}

impl Narrator {
    pub fn new(speech: SpeechClient) -> Self {
        Self { speech }
    }

    pub async fn narrate(&self, script: &Script) -> Result<Vec<NarratedUnit>, Error> {
        let units = script.units();
        let mut narrated = Vec::with_capacity(units.len());

        for (role, text) in units {
            let wav = self.speech.synthesize(text).await?;
            let duration_ms = wav_duration_ms(&wav)?;
            tracing::debug!(role = %role, duration_ms, "unit_synthesized");

            narrated.push(NarratedUnit {
                segment: Segment {
                    role,
                    text: text.to_string(),
                    duration_ms,
                },
                wav,
            });
        }

        Ok(narrated)
    }
}
