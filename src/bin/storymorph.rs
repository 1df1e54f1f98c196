use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "storymorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the story at a scroll offset and print the frame as JSON.
    Frame(FrameArgs),
    /// Compute one layout for the story's points and print it as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Raw scroll offset.
    #[arg(long)]
    offset: f64,

    /// Scroll distance covering the whole story.
    #[arg(long)]
    extent: f64,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout kind (grid, scatter, bar, radial, histogram, dotplot, beeswarm, violin).
    #[arg(long)]
    kind: String,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn read_story_json(path: &Path) -> anyhow::Result<storymorph::Story> {
    let f = File::open(path).with_context(|| format!("open story '{}'", path.display()))?;
    let r = BufReader::new(f);
    let story: storymorph::Story =
        serde_json::from_reader(r).with_context(|| "parse story JSON")?;
    story.validate()?;
    Ok(story)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let story = read_story_json(&args.in_path)?;
    let mut session = storymorph::MorphSession::new(story)?;
    let frame = session.frame_at_offset(args.offset, args.extent)?;
    if frame.warnings > 0 {
        eprintln!(
            "warning: {} point(s) had missing values and were placed at 0",
            frame.warnings
        );
    }
    write_json(&frame, args.out.as_deref())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let kind: storymorph::LayoutKind = args.kind.parse()?;
    let story = read_story_json(&args.in_path)?;
    let calc = storymorph::LayoutCalculator::new(story.canvas, story.layout.clone())?;
    let map = calc.compute(kind, &story.points, &story.style)?;
    write_json(&map, args.out.as_deref())
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
