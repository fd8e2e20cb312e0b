use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cueline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the segment timeline for a presentation JSON.
    Timeline(TimelineArgs),
    /// Report the active segment and visible nodes at a playback instant.
    Cues(CuesArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input presentation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output timeline JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct CuesArgs {
    /// Input presentation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback instant: `MM:SS`, `HH:MM:SS`, or raw milliseconds.
    #[arg(long)]
    at: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Cues(args) => cmd_cues(args),
    }
}

fn load_presentation(path: &PathBuf) -> anyhow::Result<cueline::Presentation> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read presentation '{}'", path.display()))?;
    let pres: cueline::Presentation = serde_json::from_str(&text)
        .with_context(|| format!("parse presentation '{}'", path.display()))?;
    pres.validate()?;
    Ok(pres)
}

fn parse_instant(at: &str) -> anyhow::Result<cueline::Millis> {
    if !at.is_empty() && at.chars().all(|c| c.is_ascii_digit()) {
        return Ok(cueline::Millis(at.parse()?));
    }
    Ok(cueline::parse_timecode(at)?)
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let pres = load_presentation(&args.in_path)?;
    let (timeline, _root) = cueline::derive_markers(&pres.root, pres.duration);

    let json = if args.pretty {
        serde_json::to_string_pretty(&timeline)?
    } else {
        serde_json::to_string(&timeline)?
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write timeline '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_cues(args: CuesArgs) -> anyhow::Result<()> {
    let pres = load_presentation(&args.in_path)?;
    let (timeline, root) = cueline::derive_markers(&pres.root, pres.duration);
    let at = parse_instant(&args.at)?;

    let mut engine = cueline::CueEngine::new(timeline, &root)?;
    engine.update(at);

    match engine.current_segment() {
        Some(seg) => println!("segment {} [{}..{}]", seg.id, seg.start, seg.end),
        None => println!("segment none"),
    }
    for id in engine.visible_nodes() {
        println!("visible {id}");
    }
    Ok(())
}
