use anyhow::{Context, Result};
use clap::Parser;
use impossible_puzzle::dialogue::{render_pairs, Dialogue, Reply, Speech};
use impossible_puzzle::{Engine, EngineConfig};
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use tracing::level_filters::LevelFilter;
use tracing::{error, warn};

/// Plays the sum/product "impossible puzzle" dialogue.
///
/// P (who knows a·b) and S (who knows a+b) take turns saying "know",
/// "don't know" or "stop"; the program reports which pairs remain possible.
#[derive(Parser)]
#[command(name = "puzzle")]
struct Cli {
    /// Upper bound n for both coordinates; prompted for when omitted
    #[arg(short = 'n', long)]
    bound: Option<u64>,

    /// Worker threads for the probes (defaults to hardware parallelism)
    #[arg(short, long)]
    threads: Option<NonZeroUsize>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "off")]
    log_level: LevelFilter,

    /// Print resolved pairs as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let bound = match cli.bound {
        Some(bound) => bound,
        None => prompt_bound(&mut lines)?,
    };

    let config = EngineConfig { threads: cli.threads, ..Default::default() };
    let engine = Engine::with_config(bound, config)
        .inspect_err(|e| error!("{}", e))
        .context("cannot start the puzzle engine")?;
    let mut dialogue = Dialogue::new(&engine);

    loop {
        print!("{}: ", dialogue.turn());
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let speech = match line?.parse::<Speech>() {
            Ok(speech) => speech,
            Err(e) => {
                warn!("{}", e);
                println!("{}", e);
                continue;
            }
        };

        match dialogue.respond(speech)? {
            Reply::Pairs(pairs) => println!("{}", render_pairs(&pairs, cli.json)?),
            Reply::Noted => {}
            Reply::Stopped => break,
        }
    }

    Ok(())
}

fn prompt_bound(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<u64> {
    print!("Enter n: ");
    io::stdout().flush()?;

    let line = lines.next().context("no upper bound given")??;
    line.trim()
        .parse()
        .with_context(|| format!("invalid upper bound '{}'", line.trim()))
}
