// src/main.rs
use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lexiscan::{
    AnalysisResult,
    config::Config,
    lexer::tables::{KeywordCase, save_table_json, table_to_json},
    service::Service,
};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "lexiscan")]
#[command(about = "Tokenize C-like source and trace the automaton behind each token", long_about = None)]
struct Cli {
    /// History file (default: $LEXISCAN_HISTORY, else in-memory only)
    #[arg(long, global = true, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Transition table definition to load instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Keyword matching policy: exact | insensitive
    #[arg(long, global = true, value_name = "POLICY")]
    keyword_case: Option<KeywordCase>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan files (or stdin when none are given)
    Analyze {
        files: Vec<PathBuf>,
        /// Print the full analysis result as JSON
        #[arg(long)]
        json: bool,
        /// Print the transition path of every token
        #[arg(long)]
        trace: bool,
        /// Print the per-type token breakdown
        #[arg(long)]
        stats: bool,
        /// Do not record the analysis in history
        #[arg(long)]
        no_history: bool,
    },
    /// Print the transition table as JSON, or write it to a file
    Table {
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Print the token type catalogue
    Types,
    /// Inspect or edit analysis history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    List,
    Delete { id: String },
    Clear,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(p) = cli.history {
        config.history_path = Some(p);
    }
    if let Some(p) = cli.table {
        config.table_path = Some(p);
    }
    if let Some(c) = cli.keyword_case {
        config.keyword_case = c;
    }

    let service = Service::from_config(&config).context("failed to load transition table")?;

    match cli.command {
        Command::Analyze {
            files,
            json,
            trace,
            stats,
            no_history,
        } => {
            let inputs = read_inputs(&files)?;
            let results: Vec<(String, AnalysisResult)> = inputs
                .into_par_iter()
                .map(|(name, src)| {
                    let r = if no_history {
                        service.analyze_untracked(&src)
                    } else {
                        service.analyze(&src)
                    };
                    r.map(|r| (name.clone(), r))
                        .with_context(|| format!("cannot analyze {name}"))
                })
                .collect::<Result<_>>()?;

            for (name, r) in &results {
                if json {
                    println!("{}", serde_json::to_string_pretty(r)?);
                    continue;
                }
                if results.len() > 1 {
                    println!("==> {name} <==");
                }
                print_tokens(r, trace);
                if stats {
                    print!("{}", r.token_stats.render());
                }
            }
        }
        Command::Table { out } => match out {
            Some(path) => {
                save_table_json(&path, service.transition_table())
                    .with_context(|| format!("cannot write {}", path.display()))?;
                eprintln!("wrote transition table to {}", path.display());
            }
            None => println!("{}", table_to_json(service.transition_table())?),
        },
        Command::Types => {
            println!("{}", serde_json::to_string_pretty(&service.token_types())?);
        }
        Command::History { action } => match action {
            HistoryAction::List => {
                println!("{}", serde_json::to_string_pretty(&service.history()?)?);
            }
            HistoryAction::Delete { id } => {
                if !service.delete_history(&id)? {
                    bail!("no history entry with id {id}");
                }
                eprintln!("deleted {id}");
            }
            HistoryAction::Clear => {
                service.clear_history()?;
                eprintln!("history cleared");
            }
        },
    }
    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .context("failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), s)]);
    }
    files
        .iter()
        .map(|p| {
            let s = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            Ok((p.display().to_string(), s))
        })
        .collect()
}

fn print_tokens(r: &AnalysisResult, trace: bool) {
    for (tok, tr) in r.tokens.iter().zip(&r.state_transitions) {
        println!(
            "{:>4}:{:<4} {:<11} {:?}",
            tok.line,
            tok.column,
            tok.kind.as_str(),
            tok.lexeme
        );
        if trace {
            let path: Vec<String> = tr
                .path
                .iter()
                .map(|s| {
                    if s.char.is_empty() {
                        s.state.to_string()
                    } else {
                        format!("-{:?}-> {}", s.char, s.state)
                    }
                })
                .collect();
            println!("            {}", path.join(" "));
        }
    }
}
