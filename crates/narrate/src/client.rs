use crate::error::Error;

#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub voice: String,
}

/// Speech-synthesis client for OpenAI-compatible `/audio/speech` endpoints.
///
/// Always requests WAV output so the caller can measure the render without
/// pulling in a general-purpose decoder.
pub struct SpeechClient {
    config: SpeechConfig,
    http: reqwest::Client,
}

impl SpeechClient {
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, Error> {
        let request = SpeechRequest {
            model: &self.config.model,
            voice: &self.config.voice,
            input: text,
            response_format: "wav",
        };

        let url = format!(
            "{}/audio/speech",
            self.config.api_base.trim_end_matches('/')
        );

        tracing::debug!(model = %self.config.model, "speech_request_started");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(http_status = status.as_u16(), "speech_request_failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[derive(Debug, serde::Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}
