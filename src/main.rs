//! # tonalchat CLI
//!
//! Command-line interface for the tonalchat library.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tonalchat::cli::Args;
use tonalchat::format::{OutputFormat, to_format_string, write_to_format};
use tonalchat::parser::ChatParser;
use tonalchat::parsing::date::DayOrder;
use tonalchat::tone::Tone;
use tonalchat::{Message, TonalchatError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so `-o -` output stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "tonalchat=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Prints progress lines to stdout, or to stderr when stdout carries the
/// records.
macro_rules! say {
    ($to_stdout:expr, $($arg:tt)*) => {
        if $to_stdout {
            eprintln!($($arg)*);
        } else {
            println!($($arg)*);
        }
    };
}

fn run(args: &Args) -> Result<(), TonalchatError> {
    let total_start = Instant::now();
    let quiet = args.writes_to_stdout();
    let format: OutputFormat = args.format.into();
    let output_path = args.output_path();
    let options = args.parse_options();

    say!(quiet, "💬 tonalchat v{}", env!("CARGO_PKG_VERSION"));
    say!(quiet, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    say!(quiet, "📂 Input:   {}", args.input);
    say!(quiet, "💾 Output:  {}", if quiet { "stdout" } else { output_path.as_str() });
    say!(quiet, "📄 Format:  {format}");
    match options.days_first {
        Some(days_first) => say!(quiet, "📅 Dates:   {}", DayOrder::from_days_first(days_first)),
        None => say!(quiet, "📅 Dates:   auto-detect"),
    }
    say!(quiet, "");

    say!(quiet, "⏳ Parsing...");
    let parse_start = Instant::now();
    let messages = ChatParser::with_config(options).parse(Path::new(&args.input))?;
    say!(
        quiet,
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );
    info!(count = messages.len(), input = %args.input, "parsed export");

    let output_config = args.output_config();
    if quiet {
        let rendered = to_format_string(&messages, format, &output_config)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    } else {
        say!(quiet, "💾 Writing {format}...");
        write_to_format(&messages, &output_path, format, &output_config)?;
        say!(quiet, "");
        say!(quiet, "✅ Done! Output saved to {output_path}");
    }

    let summary = Summary::from_messages(&messages);
    say!(quiet, "");
    say!(quiet, "📊 Summary:");
    say!(quiet, "   Messages:     {}", summary.total);
    say!(quiet, "   From users:   {}", summary.total - summary.system);
    say!(quiet, "   System:       {}", summary.system);
    if summary.attachments > 0 {
        say!(quiet, "   Attachments:  {}", summary.attachments);
    }
    if summary.tones.is_empty() {
        say!(quiet, "   Tones:        none");
    } else {
        let tones: Vec<String> = summary
            .tones
            .iter()
            .map(|(tone, count)| format!("/{} ×{count}", tone.code()))
            .collect();
        say!(quiet, "   Tones:        {}", tones.join(", "));
    }

    say!(quiet, "");
    say!(quiet, "⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Counts reported after a run.
struct Summary {
    total: usize,
    system: usize,
    attachments: usize,
    tones: BTreeMap<Tone, usize>,
}

impl Summary {
    fn from_messages(messages: &[Message]) -> Self {
        let mut tones = BTreeMap::new();
        for tone in messages.iter().filter_map(Message::tone) {
            *tones.entry(tone).or_insert(0) += 1;
        }

        Self {
            total: messages.len(),
            system: messages.iter().filter(|m| m.is_system()).count(),
            attachments: messages.iter().filter(|m| m.attachment.is_some()).count(),
            tones,
        }
    }
}
