use crate::error::Error;
use crate::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::types::Script;

#[derive(Debug, Clone)]
pub struct ScriptWriterConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// Chat-completions client that turns a story idea into a [`Script`].
///
/// Talks to any OpenAI-compatible `/chat/completions` endpoint. One request
/// per script, no retries; a bad response surfaces as an error and the caller
/// decides what to do with it.
pub struct ScriptWriter {
    config: ScriptWriterConfig,
    http: reqwest::Client,
}

impl ScriptWriter {
    pub fn new(config: ScriptWriterConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub async fn generate(&self, idea: &str) -> Result<Script, Error> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(idea),
                },
            ],
            temperature: 0.8,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );

        tracing::debug!(model = %self.config.model, "script_request_started");

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
            tracing::warn!(http_status = status.as_u16(), "script_request_failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::InvalidScript("model returned no choices".into()))?;

        let script = parse_script(&content)?;
        tracing::debug!(lines = script.lines.len(), "script_generated");
        Ok(script)
    }
}

#[derive(Debug, serde::Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, serde::Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, serde::Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, serde::Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, serde::Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Parse the assistant message into a validated [`Script`].
///
/// The model is told to answer with bare JSON, but some providers wrap it in
/// a markdown fence anyway; tolerate that one deviation.
fn parse_script(content: &str) -> Result<Script, Error> {
    let payload = strip_code_fence(content);
    let script: Script =
        serde_json::from_str(payload).map_err(|e| Error::InvalidScript(e.to_string()))?;
    script.validate()?;
    Ok(script)
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SCRIPT_JSON: &str = r#"{"hook":"He vanished.","lines":["Nobody looked.","One kid did."],"closer":"She knew why."}"#;

    // ── parse_script ─────────────────────────────────────────────────────

    #[test]
    fn parses_bare_json() {
        let script = parse_script(SCRIPT_JSON).unwrap();
        assert_eq!(script.hook, "He vanished.");
        assert_eq!(script.lines.len(), 2);
    }

    #[test]
    fn parses_json_inside_markdown_fence() {
        let fenced = format!("```json\n{SCRIPT_JSON}\n```");
        let script = parse_script(&fenced).unwrap();
        assert_eq!(script.closer, "She knew why.");

        let plain_fence = format!("```\n{SCRIPT_JSON}\n```");
        assert!(parse_script(&plain_fence).is_ok());
    }

    #[test]
    fn rejects_non_json_content() {
        let err = parse_script("Sure! Here is your script: ...").unwrap_err();
        assert!(matches!(err, Error::InvalidScript(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = parse_script(r#"{"hook":"h","lines":"not a list","closer":"c"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidScript(_)));

        let err = parse_script(r#"{"hook":"h","lines":[]}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidScript(_)));
    }

    #[test]
    fn rejects_blank_hook() {
        let err = parse_script(r#"{"hook":"  ","lines":["l"],"closer":"c"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidScript(_)));
    }

    // ── ScriptWriter ─────────────────────────────────────────────────────

    fn writer_for(server: &MockServer) -> ScriptWriter {
        ScriptWriter::new(ScriptWriterConfig {
            api_base: server.uri(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        })
    }

    #[tokio::test]
    async fn generate_posts_to_chat_completions() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": SCRIPT_JSON}}]
        });
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({"model": "test-model"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let script = writer_for(&server).generate("an idea").await.unwrap();
        assert_eq!(script.hook, "He vanished.");
        assert_eq!(script.lines.len(), 2);
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let err = writer_for(&server).generate("an idea").await.unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_maps_to_invalid_script() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = writer_for(&server).generate("an idea").await.unwrap_err();
        assert!(matches!(err, Error::InvalidScript(_)));
    }
}
