use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mvgwand", version)]
struct Cli {
    /// Log wand diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON draw script and print the compiled MVG program.
    Compile(CompileArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input draw script JSON (an array of commands tagged by `op`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path for the program (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Wand settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Target image width.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Target image height.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Also print artifacts published on the target image (pattern bodies and geometry).
    #[arg(long)]
    artifacts: bool,

    /// Write the final graphic context as JSON.
    #[arg(long)]
    context: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_settings_json(path: &Path) -> anyhow::Result<mvgwand::WandSettings> {
    let f = File::open(path).with_context(|| format!("open settings '{}'", path.display()))?;
    let r = BufReader::new(f);
    let settings: mvgwand::WandSettings =
        serde_json::from_reader(r).with_context(|| "parse settings JSON")?;
    Ok(settings)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "target width/height must be > 0"
    );
    let settings = match &args.settings {
        Some(path) => read_settings_json(path)?,
        None => mvgwand::WandSettings::default(),
    };
    let commands = mvgwand::load_script(&args.in_path)?;
    let base_dir = args.in_path.parent().unwrap_or_else(|| Path::new("."));

    let mut image = mvgwand::TargetImage::new(args.width, args.height);
    let (program, context) = {
        let mut wand = mvgwand::DrawingWand::with_settings(&mut image, settings);
        mvgwand::replay(&mut wand, &commands, base_dir)
            .with_context(|| format!("replay '{}'", args.in_path.display()))?;
        (wand.vector_graphics().to_owned(), wand.context().clone())
    };

    if let Some(path) = &args.context {
        let json = serde_json::to_vec_pretty(&context).context("serialize graphic context")?;
        std::fs::write(path, json)
            .with_context(|| format!("write context '{}'", path.display()))?;
    }

    let mut report = program;
    if args.artifacts {
        for (key, value) in image.artifacts() {
            report.push_str(&format!("# artifact {key}\n{value}"));
            if !value.ends_with('\n') {
                report.push('\n');
            }
        }
    }

    match &args.out {
        Some(out) => {
            std::fs::write(out, &report)
                .with_context(|| format!("write program '{}'", out.display()))?;
            eprintln!(
                "compiled {} commands -> {}",
                commands.len(),
                out.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .context("write program to stdout")?;
        }
    }
    Ok(())
}
