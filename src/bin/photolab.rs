use std::{
    fs::File,
    io::{BufRead as _, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use photolab::{Dispatcher, Input, LineOutcome, ScriptReport, StdoutFeedback};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Please provide a script txt file or a command input";

#[derive(Parser, Debug)]
#[command(name = "photolab", version, about = "Scriptable raster image editor")]
struct Cli {
    /// Script files to run in order. Without any, start the interactive prompt.
    scripts: Vec<PathBuf>,

    /// Write the per-line outcome of every command as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut dispatcher = Dispatcher::new(StdoutFeedback);
    let reports = if cli.scripts.is_empty() {
        run_repl(&mut dispatcher)?
    } else {
        run_scripts(&mut dispatcher, &cli.scripts)
    };

    if let Some(path) = &cli.report {
        write_report(path, &reports)?;
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_scripts(
    dispatcher: &mut Dispatcher<StdoutFeedback>,
    scripts: &[PathBuf],
) -> Vec<ScriptReport> {
    scripts
        .iter()
        .filter_map(|path| dispatcher.run_script_file(path).ok())
        .collect()
}

fn run_repl(dispatcher: &mut Dispatcher<StdoutFeedback>) -> anyhow::Result<Vec<ScriptReport>> {
    let mut reports = Vec::new();
    let mut interactive = ScriptReport::default();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut line_no = 0usize;

    loop {
        {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{PROMPT}").context("write prompt")?;
            out.flush().context("flush prompt")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read stdin")?;
        line_no += 1;

        match Input::classify(&line) {
            Input::Exit => break,
            Input::Script(path) => {
                if let Ok(report) = dispatcher.run_script_file(&path) {
                    reports.push(report);
                }
            }
            Input::Command(cmd) => {
                if let Some(outcome) = dispatcher.execute_line(&cmd) {
                    interactive.lines.push(LineOutcome {
                        line: line_no,
                        command: cmd,
                        outcome,
                    });
                }
            }
        }
    }

    if !interactive.lines.is_empty() {
        reports.push(interactive);
    }
    Ok(reports)
}

fn write_report(path: &Path, reports: &[ScriptReport]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create report '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), reports)
        .with_context(|| format!("write report '{}'", path.display()))?;
    Ok(())
}
