use indoc::{formatdoc, indoc};

/// Persona for the chat model. JSON-only output is part of the contract;
/// anything wrapped around it is handled leniently by the response parser.
pub const SYSTEM_PROMPT: &str = indoc! {"
    You are a scriptwriter for TikTok and YouTube Shorts.
    You take rough story ideas and turn them into short, punchy scripts for 30-60 second vertical videos.

    Your style:
    - Strong hook in the first line
    - Short, emotionally charged sentences
    - Very visual and easy to imagine
    - Written in casual, modern language

    You ALWAYS respond with valid JSON only. No explanations, no markdown, no extra text.
"};

pub fn user_prompt(idea: &str) -> String {
    formatdoc! {r#"
        Turn the following story idea into a short script for a 30-60 second vertical video.

        Requirements:
        - The script must be in ENGLISH.
        - The tone should match the idea (if the idea feels sad, keep it sad; if it feels light, keep it light).
        - The first part is a HOOK: 1-2 sentences that grab attention and make people want to keep watching.
        - Then write 5-10 short LINES that tell the story in order.
        - Finally write 1 CLOSER sentence that ends on a strong emotional beat or cliffhanger.

        Return your answer as valid JSON exactly in this format:

        {{
          "hook": "string",
          "lines": ["string", "string", "..."],
          "closer": "string"
        }}

        Story idea:
        ---
        {idea}
        ---"#}
}
