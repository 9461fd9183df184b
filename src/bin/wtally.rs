//! `wtally`: word frequency analysis for JSON text records.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use wordtally::report::{render_batch, render_benchmark, render_file, render_report};
use wordtally::{
    analyze, generate_documents, run_batch, run_benchmark, run_paths, Analyzer, TallyConfig,
};

#[derive(Parser)]
#[command(name = "wtally", version, about = "Word frequency analyzer for JSON text records")]
struct Cli {
    /// Config file (TOML). Defaults to the user config dir, then built-ins.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the numbered document files.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze text_0.json .. text_{N-1}.json
    Analyze {
        #[arg(short, long)]
        count: usize,
        /// Number of ranked words (overrides config).
        #[arg(long)]
        top: Option<usize>,
    },

    /// Analyze the given files in order
    File {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        top: Option<usize>,
    },

    /// Analyze literal text
    Text {
        text: String,
        /// Stop-word (repeatable).
        #[arg(short, long = "stopword")]
        stopwords: Vec<String>,
        #[arg(long)]
        top: Option<usize>,
    },

    /// Write N sample document files
    Generate {
        #[arg(short, long)]
        count: usize,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Time repeated analysis of N files
    Bench {
        #[arg(short, long)]
        count: usize,
        #[arg(long, default_value_t = 1)]
        rounds: usize,
    },

    /// Interactive menu
    Menu,

    /// Print shell completions
    Completions { shell: Shell },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = TallyConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(dir) = cli.dir {
        config.data_dir = dir;
    }
    let json = cli.json;

    match cli.command {
        Command::Analyze { count, top } => {
            if let Some(k) = top {
                config.top_k = k;
            }
            let batch = run_batch(&config.data_dir, count, &config);
            if json {
                print_json(&batch.to_view())?;
            } else {
                print!("{}", render_batch(&batch, config.top_k));
            }
        }
        Command::File { paths, top } => {
            let mut analyzer = Analyzer::new(config.top_k);
            if let Some(k) = top {
                analyzer.set_top_k(k);
            }
            let batch = run_paths(paths, &mut analyzer);
            if json {
                print_json(&batch.to_view())?;
            } else {
                print!("{}", render_batch(&batch, analyzer.top_k()));
            }
        }
        Command::Text {
            text,
            stopwords,
            top,
        } => {
            let top_k = top.unwrap_or(config.top_k);
            let report = analyze(&text, &stopwords, top_k);
            if json {
                print_json(&report)?;
            } else {
                print!("{}", render_report(&report, top_k));
            }
        }
        Command::Generate { count, seed } => {
            let written = generate(&config.data_dir, count, seed, &config)?;
            if json {
                print_json(&written)?;
            } else {
                for path in &written {
                    println!("Created {}", path.display());
                }
            }
        }
        Command::Bench { count, rounds } => {
            let report = run_benchmark(&config.data_dir, count, rounds, &config);
            if json {
                print_json(&report)?;
            } else {
                print!("{}", render_benchmark(&report));
            }
        }
        Command::Menu => menu(&config)?,
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "wtally", &mut io::stdout());
        }
    }
    Ok(())
}

fn generate(
    dir: &Path,
    count: usize,
    seed: Option<u64>,
    config: &TallyConfig,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(generate_documents(dir, count, config, &mut rng)?)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{}", out);
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive menu
// ---------------------------------------------------------------------------

/// Read one line; `None` on Ctrl-C / Ctrl-D.
fn prompt(rl: &mut DefaultEditor, text: &str) -> Result<Option<String>> {
    match rl.readline(text) {
        Ok(line) => {
            let line = line.trim().to_string();
            if !line.is_empty() {
                rl.add_history_entry(line.as_str())?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn prompt_count(rl: &mut DefaultEditor) -> Result<Option<usize>> {
    loop {
        let Some(line) = prompt(rl, "Number of files: ")? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => println!("Please enter a non-negative integer."),
        }
    }
}

fn menu(config: &TallyConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let dir = config.data_dir.as_path();

    println!("================ WORD FREQUENCY ANALYZER ================");
    loop {
        println!("\n1) Analyze files\n2) Debug\n3) Exit");
        io::stdout().flush()?;
        let Some(choice) = prompt(&mut rl, "> ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(count) = prompt_count(&mut rl)? else {
                    break;
                };
                let batch = run_batch(dir, count, config);
                for file in &batch.files {
                    match &file.result {
                        Ok(report) => {
                            println!();
                            let rendered =
                                render_file(file.index, &file.path, report, config.top_k);
                            print!("{}", rendered);
                        }
                        Err(e) => println!("{}", e),
                    }
                }
            }
            "2" => {
                println!("1) Generate files\n2) Benchmark");
                let Some(sub) = prompt(&mut rl, "> ")? else {
                    break;
                };
                match sub.as_str() {
                    "1" => {
                        let Some(count) = prompt_count(&mut rl)? else {
                            break;
                        };
                        match generate(dir, count, None, config) {
                            Ok(written) => {
                                for path in &written {
                                    println!("Created {}", path.display());
                                }
                            }
                            Err(e) => println!("error: {:#}", e),
                        }
                    }
                    "2" => {
                        let Some(count) = prompt_count(&mut rl)? else {
                            break;
                        };
                        let report = run_benchmark(dir, count, 1, config);
                        print!("{}", render_benchmark(&report));
                    }
                    other => println!("Unknown option {:?}", other),
                }
            }
            "3" => break,
            other => println!("Unknown option {:?}", other),
        }
    }
    Ok(())
}
