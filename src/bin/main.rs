use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use lipi_core::config::AppConfig;
use lipi_core::library::StoredText;
use lipi_core::persistence::{load_or_samples, save_to_disk};
use lipi_core::{classify, tokenize, ReaderSession, Transliterator, WordView};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Parser)]
#[command(name = "lipi", version, about = "Read foreign-script text with Latin transliteration")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "LIPI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split text into word and whitespace tokens
    Tokenize {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the script of every character
    Classify { text: String },
    /// Transliterate a word character by character
    Translit {
        word: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the translation URL for a word
    Url { word: String },
    /// List stored texts
    Samples,
    /// Store a text in the library
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        text: String,
    },
    /// Remove a stored text
    Remove { id: String },
    /// Interactive reader
    Read {
        text: Option<String>,
        /// Open a stored text by id
        #[arg(long, conflicts_with = "text")]
        sample: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let library_path = config.library.resolved_path();

    match cli.command {
        Commands::Tokenize { text, json } => {
            let tokens = tokenize(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in tokens {
                    println!("{:?}\t{:?}", token.kind, token.content);
                }
            }
        }
        Commands::Classify { text } => {
            for c in text.chars() {
                println!("{c}\tU+{:04X}\t{}", c as u32, classify(c));
            }
        }
        Commands::Translit { word, json } => {
            let view = WordView::new(&word, &config.translate);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_cells(&view);
            }
        }
        Commands::Url { word } => {
            println!("{}", WordView::new(&word, &config.translate).translate_url);
        }
        Commands::Samples => {
            for text in load_or_samples(&library_path).iter() {
                println!("{}\t{}\t{}\t{}", text.id, text.script, text.title, text.text);
            }
        }
        Commands::Add { id, title, text } => {
            let mut library = load_or_samples(&library_path);
            library.add(StoredText::new(&id, &title, &text))?;
            save_to_disk(&library, &library_path)?;
            println!("Stored '{id}' in {}", library_path.display());
        }
        Commands::Remove { id } => {
            let mut library = load_or_samples(&library_path);
            library.remove(&id)?;
            save_to_disk(&library, &library_path)?;
            println!("Removed '{id}'");
        }
        Commands::Read { text, sample } => {
            let initial = match (text, sample) {
                (Some(text), _) => text,
                (None, Some(id)) => match load_or_samples(&library_path).get(&id) {
                    Some(stored) => stored.text.clone(),
                    None => bail!("no stored text with id '{id}'"),
                },
                (None, None) => String::new(),
            };
            let mut session = ReaderSession::new(config.translate.clone());
            session.process(&initial);
            run_reader(&mut session)?;
        }
    }
    Ok(())
}

fn run_reader(session: &mut ReaderSession) -> anyhow::Result<()> {
    loop {
        print_ui(session)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd.trim() {
            "exit" => break,
            ":c" => session.clear_selection(),
            s if s.starts_with(':') && s.len() > 1 => {
                // Select word :1, :2 etc
                match s[1..].parse::<usize>() {
                    Ok(n) if n > 0 => {
                        let words = session.word_indices();
                        match words.get(n - 1) {
                            Some(&index) => {
                                session.select(index)?;
                            }
                            None => println!("{}", "No such word.".red()),
                        }
                    }
                    _ => println!("{}", "Expected :<number>".red()),
                }
            }
            "" => {}
            _ => session.process(cmd),
        }
    }
    Ok(())
}

fn print_ui(session: &ReaderSession) -> anyhow::Result<()> {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "Script Transliterator".bold());
    println!("---------------------------------------------------------------");
    println!("Type text to process it. Select a word with ':1', ':2'.");
    println!("':c' clears the selection, 'exit' quits.\n");

    if session.text().trim().is_empty() {
        println!("{}", "Processed text will appear here.".dim());
    } else {
        let selected = session.selected_index();
        let mut n = 0;
        let mut line = String::new();
        for (i, token) in session.tokens().iter().enumerate() {
            if token.is_word() {
                n += 1;
                let word = if selected == Some(i) {
                    token.content.as_str().underlined().to_string()
                } else {
                    token.content.clone()
                };
                line.push_str(&format!("{word}{}", format!("[{n}]").dim()));
            } else {
                line.push_str(&token.content);
            }
        }
        println!("{line}");
    }

    if let Some(view) = session.selected_view() {
        println!("\n{} {}", "Selected word:".cyan(), view.word);
        print_cells(&view);
        println!("{} {}", "Translate:".cyan(), view.translate_url);
    }
    print!("\n> ");
    stdout().flush()?;
    Ok(())
}

/// Source characters above their Latin renderings, column aligned.
fn print_cells(view: &WordView) {
    let widths = view.column_widths();
    let mut top = String::new();
    let mut bottom = String::new();
    for (cell, &width) in view.cells.iter().zip(&widths) {
        top.push_str(&pad(&cell.source.to_string(), width));
        top.push_str(" | ");
        bottom.push_str(&pad(&cell.latin, width));
        bottom.push_str(" | ");
    }
    println!("{}", top.trim_end());
    println!("{}", bottom.trim_end().green());
    println!("{} {}", "Latin:".cyan(), Transliterator::new().render(&view.word));
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}
