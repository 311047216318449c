use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::prelude::*;

use reel_compose::{concat_wavs, render_video, write_srt};
use reel_narrate::{Narrator, SpeechClient, SpeechConfig};
use reel_scriptwriter::{ScriptWriter, ScriptWriterConfig};
use reel_timeline::{CadencePolicy, build_timeline};

#[derive(Parser)]
#[command(
    name = "storyreel",
    about = "Turn a story idea into a narrated vertical video with timed captions"
)]
struct Cli {
    /// The story idea to narrate.
    idea: String,

    /// Background video the captions and narration are laid over.
    #[arg(long, default_value = "background.mp4")]
    background: PathBuf,

    /// Output video path.
    #[arg(long, default_value = "storyreel.mp4")]
    out: PathBuf,

    #[arg(long, env = "STORYREEL_LLM_BASE_URL")]
    llm_base_url: String,

    #[arg(long, env = "STORYREEL_LLM_API_KEY", default_value = "")]
    llm_api_key: String,

    #[arg(long, env = "STORYREEL_LLM_MODEL")]
    llm_model: String,

    #[arg(long, env = "STORYREEL_TTS_BASE_URL")]
    tts_base_url: String,

    #[arg(long, env = "STORYREEL_TTS_API_KEY", default_value = "")]
    tts_api_key: String,

    #[arg(long, env = "STORYREEL_TTS_MODEL")]
    tts_model: String,

    #[arg(long, env = "STORYREEL_TTS_VOICE", default_value = "alloy")]
    tts_voice: String,

    /// Words per caption for hooks and closers.
    #[arg(long, default_value_t = 4)]
    hook_closer_words: usize,

    /// Words per caption for story lines.
    #[arg(long, default_value_t = 3)]
    line_words: usize,

    /// Keep the per-run work directory instead of removing it.
    #[arg(long)]
    keep_workdir: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    anyhow::ensure!(
        cli.background.exists(),
        "background video not found: {}",
        cli.background.display()
    );

    let workdir = std::env::temp_dir().join(format!("storyreel-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&workdir)
        .with_context(|| format!("creating work directory {}", workdir.display()))?;
    tracing::info!(workdir = %workdir.display(), "run_started");

    let result = run(&cli, &workdir).await;

    if cli.keep_workdir {
        tracing::info!(workdir = %workdir.display(), "workdir_kept");
    } else if let Err(err) = std::fs::remove_dir_all(&workdir) {
        tracing::warn!(error = %err, "workdir_cleanup_failed");
    }

    result
}

async fn run(cli: &Cli, workdir: &Path) -> anyhow::Result<()> {
    let writer = ScriptWriter::new(ScriptWriterConfig {
        api_base: cli.llm_base_url.clone(),
        api_key: cli.llm_api_key.clone(),
        model: cli.llm_model.clone(),
    });
    let script = writer
        .generate(&cli.idea)
        .await
        .context("script generation failed")?;
    tracing::info!(lines = script.lines.len(), "script_ready");

    let narrator = Narrator::new(SpeechClient::new(SpeechConfig {
        api_base: cli.tts_base_url.clone(),
        api_key: cli.tts_api_key.clone(),
        model: cli.tts_model.clone(),
        voice: cli.tts_voice.clone(),
    }));
    let units = narrator.narrate(&script).await.context("narration failed")?;
    let total_ms: i64 = units.iter().map(|u| u.segment.duration_ms).sum();
    tracing::info!(units = units.len(), total_ms, "narration_ready");

    let segments: Vec<_> = units.iter().map(|u| u.segment.clone()).collect();
    let policy = CadencePolicy::new(cli.hook_closer_words, cli.line_words);
    let chunks = build_timeline(&segments, policy)?;
    tracing::info!(chunks = chunks.len(), "timeline_ready");

    let srt_path = workdir.join("captions.srt");
    let srt_file = std::fs::File::create(&srt_path)
        .with_context(|| format!("creating {}", srt_path.display()))?;
    write_srt(&chunks, srt_file)?;

    let clips: Vec<Vec<u8>> = units.into_iter().map(|u| u.wav).collect();
    let narration_path = workdir.join("narration.wav");
    std::fs::write(&narration_path, concat_wavs(&clips)?)
        .with_context(|| format!("writing {}", narration_path.display()))?;

    render_video(&cli.background, &narration_path, &srt_path, &cli.out)?;
    tracing::info!(out = %cli.out.display(), "run_finished");
    Ok(())
}
