//! Mood Mirror CLI
//!
//! Usage:
//!   moodmirror --text "your text here"        # Single classification
//!   moodmirror --interactive                  # Line-by-line mode
//!   moodmirror --serve                        # HTTP A2A server
//!   moodmirror --text "text" --json           # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use moodmirror::core::{MoodMirrorAgent, MoodClassifier, MoodReply, run_server};
use moodmirror::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "moodmirror",
    version = VERSION,
    about = "Mood Mirror - classify emotional tone and reply with empathy",
    long_about = "Mood Mirror scores a short message with keyword and surface-signal\n\
                  heuristics, labels its mood and answers with a templated reply.\n\n\
                  Modes:\n  \
                  --text         Classify one message\n  \
                  --interactive  Classify each line from stdin\n  \
                  --serve        A2A JSON-RPC server (POST /a2a/moodmirror)"
)]
struct Args {
    /// Text to classify (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP A2A server
    #[arg(short, long)]
    serve: bool,

    /// Server host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show signal breakdown
    #[arg(long)]
    verbose: bool,

    /// Seed for reply template choice
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,moodmirror=debug".into()),
        )
        .with_writer(io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let agent = match args.seed {
        Some(seed) => MoodMirrorAgent::with_seed(seed),
        None => MoodMirrorAgent::new(),
    };

    if args.serve {
        run_serve(&args, agent).await;
    } else if args.interactive {
        run_interactive(&args, &agent);
    } else if let Some(ref text) = args.text {
        run_single(text, &args, &agent);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args, &agent);
    }
}

/// Classify one message
fn run_single(text: &str, args: &Args, agent: &MoodMirrorAgent) {
    let out = agent.reply_to_text(text);
    print_reply(&out, args);
}

/// Classify each stdin line until EOF or quit
fn run_interactive(args: &Args, agent: &MoodMirrorAgent) {
    print_header();
    println!("Type a message and press Enter. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut count = 0u64;

    loop {
        print!("{} ", ">".bold());
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Messages: {}", count);
            break;
        }
        if line.is_empty() {
            continue;
        }

        count += 1;
        let out = agent.reply_to_text(line);
        print_reply(&out, args);
    }
}

fn print_reply(out: &MoodReply, args: &Args) {
    if args.json {
        let value = serde_json::json!({
            "text": out.text,
            "mood": out.analysis.mood,
            "score": out.analysis.score,
            "keywords_found": out.analysis.keywords_found,
            "reply": out.reply,
        });
        println!("{}", value);
        return;
    }

    if args.verbose {
        print_verbose(out);
    } else if args.no_color {
        println!("{}", out.analysis.to_parseable_string());
    } else {
        let mood = out.analysis.mood;
        println!(
            "{} {}",
            mood.emoji(),
            out.analysis.to_parseable_string().color(mood.color())
        );
    }
    println!("{}", out.reply);
}

fn print_verbose(out: &MoodReply) {
    let (_, signals) = MoodClassifier::new().analyze_detailed(&out.text);
    let mood = out.analysis.mood;
    let line = |s: String| println!("{}", s.color(mood.color()));

    line("┌─────────────────────────────────────┐".to_string());
    line(format!("│ {} {} (score {:.2})", mood.emoji(), mood, out.analysis.score));
    line("├─────────────────────────────────────┤".to_string());
    line(format!("│   positive hits:   {}", signals.positive_hits));
    line(format!("│   negative hits:   {}", signals.negative_hits));
    line(format!("│   excitement:      {}", signals.excitement));
    line(format!("│   all caps:        {}", signals.all_caps));
    line(format!("│   positive emoji:  {}", signals.positive_emoji));
    line(format!("│   negative emoji:  {}", signals.negative_emoji));
    line(format!("│   tokens:          {} (mean len {:.1})", signals.token_count, signals.mean_token_len));
    line("└─────────────────────────────────────┘".to_string());
}

fn print_header() {
    println!("{}", "========================================".bold());
    println!("{}", format!("  Mood Mirror v{}", VERSION).bold());
    println!("{}", "========================================".bold());
    println!();
}

/// Run HTTP A2A server
async fn run_serve(args: &Args, agent: MoodMirrorAgent) {
    let addr = format!("{}:{}", args.host, args.port);
    if let Err(e) = run_server(&addr, agent).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
