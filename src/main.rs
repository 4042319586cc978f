// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use classic_quotes::utils::logging::{format_error, format_info, format_success, format_warning};
use classic_quotes::{Config, Corpus, QuoteMatcher, Renderer, Session};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "classic_quotes")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Reveal classic quotes by topic", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print cards without the staggered reveal
    #[arg(long, action = ArgAction::SetTrue)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up quotes for a topic
    Reveal {
        /// Topic to search for; falls back to the `topic` parameter of --url
        topic: Option<String>,

        /// Page url whose `topic` query parameter seeds the lookup
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },

    /// List known topics, optionally narrowed to those containing FILTER
    Topics {
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Read one topic per line from stdin and reveal quotes for each
    Interactive {
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },

    /// Validate the quote corpus and print statistics
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    classic_quotes::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    debug!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        debug!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let corpus = Corpus::resolve(config.corpus.custom_path()).map_err(|e| {
        eprintln!("{}", format_error(&e.to_string()));
        e
    });
    let corpus = corpus.context("Failed to load quote corpus")?;

    let delay = if cli.plain {
        0
    } else {
        config.display.reveal_delay_ms
    };
    let renderer = Renderer::new(cli.color, delay);

    match cli.command {
        Commands::Reveal { topic, url } => {
            cmd_reveal(&config, corpus, &renderer, topic, url.as_deref()).await?;
        }
        Commands::Topics { filter } => {
            cmd_topics(&corpus, &renderer, filter.as_deref())?;
        }
        Commands::Interactive { url } => {
            cmd_interactive(&config, corpus, &renderer, url.as_deref()).await?;
        }
        Commands::Verify => {
            cmd_verify(&corpus)?;
        }
    }

    Ok(())
}

async fn cmd_reveal(
    config: &Config,
    corpus: Corpus,
    renderer: &Renderer,
    topic: Option<String>,
    url: Option<&str>,
) -> Result<()> {
    let matcher = QuoteMatcher::new(&config.matcher);
    let mut session = Session::open(corpus, matcher, &config.display.base_url, url)
        .context("Failed to open session")?;

    if let Some(topic) = topic {
        session.submit(&topic);
    }

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}\n", renderer.banner())?;
    renderer.render(session.view(), &mut stdout).await?;

    if topic_was_submitted(&session) {
        writeln!(
            stdout,
            "\n{}",
            format_info(&format!("Share: {}", session.share_url()))
        )?;
    }

    info!(
        "Revealed {} of {} matching quotes",
        session.results().len(),
        session.results().candidates
    );

    Ok(())
}

fn topic_was_submitted(session: &Session) -> bool {
    !session.query().trim().is_empty()
}

fn cmd_topics(corpus: &Corpus, renderer: &Renderer, filter: Option<&str>) -> Result<()> {
    let topics = corpus.topics().suggest(filter.unwrap_or(""));

    if topics.is_empty() {
        println!(
            "{}",
            format_warning(&format!("No topics match “{}”", filter.unwrap_or("")))
        );
        return Ok(());
    }

    println!("{}", renderer.suggestions(&topics));
    Ok(())
}

async fn cmd_interactive(
    config: &Config,
    corpus: Corpus,
    renderer: &Renderer,
    url: Option<&str>,
) -> Result<()> {
    let matcher = QuoteMatcher::new(&config.matcher);
    let mut session = Session::open(corpus, matcher, &config.display.base_url, url)
        .context("Failed to open session")?;

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}\n", renderer.banner())?;
    writeln!(
        stdout,
        "{}",
        format_info("Type a topic and press enter. :topics lists topics, :quit exits.")
    )?;
    renderer.render(session.view(), &mut stdout).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":topics" => {
                let topics = session.topics().suggest("");
                writeln!(stdout, "{}", renderer.suggestions(&topics))?;
                continue;
            }
            other if other.starts_with(':') => {
                writeln!(
                    stdout,
                    "{}",
                    format_warning(&format!("Unknown command {}", other))
                )?;
                continue;
            }
            _ => {}
        }

        session.submit(&line);
        writeln!(stdout)?;
        renderer.render(session.view(), &mut stdout).await?;

        if topic_was_submitted(&session) {
            writeln!(
                stdout,
                "{}",
                format_info(&format!("Share: {}", session.share_url()))
            )?;
        }
    }

    debug!("Interactive session closed");
    Ok(())
}

fn cmd_verify(corpus: &Corpus) -> Result<()> {
    info!("Verifying quote corpus");

    let stats = corpus.stats();

    println!(
        "{}",
        format_success(&format!(
            "Corpus valid: {} quotes across {} topics",
            stats.quotes, stats.topics
        ))
    );

    for (topic, count) in &stats.per_topic {
        println!("  {:<20} {}", topic, count);
    }

    Ok(())
}
