use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use caesar_breaker::constants::{EXAMPLES, TOP_LETTERS};
use caesar_breaker::structs::LetterComparison;
use caesar_breaker::{
    analyze_frequency, brute_force, CipherError, Decryptor, DecryptionCandidate, Encryptor,
    FrequencyReport, Shift,
};
use clap::{Parser, Subcommand};
use rand::Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Break Caesar ciphers by hand, by brute force or by frequency analysis.
#[derive(Parser)]
#[command(name = "caesar")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Decrypt with a known shift
    Decrypt {
        #[arg(allow_negative_numbers = true)]
        shift: i64,
        /// Ciphertext (read from stdin when omitted)
        text: Option<String>,
    },
    /// Encrypt with a given shift, or a random one between 1 and 25
    Encrypt {
        #[arg(short, long, allow_negative_numbers = true)]
        shift: Option<i64>,
        /// Plaintext (read from stdin when omitted)
        text: Option<String>,
    },
    /// Try all 26 shifts
    Brute {
        text: Option<String>,
        /// Only show candidates that look like English
        #[arg(long)]
        only_plausible: bool,
    },
    /// Suggest a shift from letter frequencies
    Analyze {
        text: Option<String>,
        /// Letters to list in the comparison
        #[arg(long, default_value_t = TOP_LETTERS)]
        top: usize,
        /// Also print all 26 letters against English
        #[arg(long)]
        chart: bool,
    },
    /// List the sample ciphertexts
    Examples,
    /// Line-based interactive session
    Interactive,
}

#[derive(Serialize)]
struct TextOutput {
    shift: Shift,
    text: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        Command::Decrypt { shift, text } => {
            let text = text_or_stdin(text)?;
            let shift = Shift::new(shift);
            let output = TextOutput {
                shift,
                text: shift.decrypt(&text),
            };
            emit(json, &output, || println!("{}", output.text))?;
        }
        Command::Encrypt { shift, text } => {
            let text = text_or_stdin(text)?;
            let shift = match shift {
                Some(shift) => Shift::new(shift),
                None => Shift::new(rand::thread_rng().gen_range(1..=25)),
            };
            let output = TextOutput {
                shift,
                text: shift.encrypt(&text),
            };
            emit(json, &output, || {
                println!("Shift {}: {}", output.shift, output.text)
            })?;
        }
        Command::Brute {
            text,
            only_plausible,
        } => {
            let text = text_or_stdin(text)?;
            let candidates: Vec<DecryptionCandidate> = brute_force(&text)?
                .into_iter()
                .filter(|c| c.plausible || !only_plausible)
                .collect();
            emit(json, &candidates, || print_candidates(&candidates))?;
        }
        Command::Analyze { text, top, chart } => {
            let text = text_or_stdin(text)?;
            let report = analyze_frequency(&text)?;
            let summary = report.summary(top);
            emit(json, &summary, || {
                print_report(&report, top);
                if chart {
                    print_chart(&summary.comparison);
                }
            })?;
        }
        Command::Examples => {
            let examples: Vec<_> = EXAMPLES
                .iter()
                .map(|(text, description)| {
                    serde_json::json!({ "text": text, "description": description })
                })
                .collect();
            emit(json, &examples, || {
                for (i, (text, description)) in EXAMPLES.iter().enumerate() {
                    println!("{}: {} ({})", i + 1, text, description);
                }
            })?;
        }
        Command::Interactive => interactive()?,
    }

    Ok(())
}

fn emit<T: Serialize>(
    json: bool,
    value: &T,
    pretty: impl FnOnce(),
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        pretty();
    }
    Ok(())
}

fn text_or_stdin(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn print_candidates(candidates: &[DecryptionCandidate]) {
    for candidate in candidates {
        let marker = if candidate.plausible { "*" } else { " " };
        println!("{} Shift {:>2}: {}", marker, candidate.shift, candidate.text);
    }
}

fn print_report(report: &FrequencyReport, top: usize) {
    let observed = report.top_observed(top);
    let reference = FrequencyReport::top_reference(top);

    println!("{:<20} {:<20}", "Cipher Text", "Expected English");
    for i in 0..observed.len().max(reference.len()) {
        let left = observed
            .get(i)
            .map(|(c, f)| format!("{} {:>6.2}%", c, f))
            .unwrap_or_default();
        let right = reference
            .get(i)
            .map(|(c, f)| format!("{} {:>6.2}%", c, f))
            .unwrap_or_default();
        println!("{:<20} {:<20}", left, right);
    }

    println!();
    println!("Letters analysed: {} of {} characters", report.total_letters, report.text_length);
    println!("Most frequent letter in cipher: {}", report.top_letter);
    println!("Assuming this represents 'E', suggested shift: {}", report.suggested_shift);
    println!("{}", report.suggested_text);
}

fn print_chart(rows: &[LetterComparison]) {
    println!();
    println!("{:<6} {:>8} {:>11}", "Letter", "English", "Ciphertext");
    for row in rows {
        println!(
            "{:<6} {:>7.2}% {:>10.2}%  {}",
            row.letter,
            row.english,
            row.ciphertext,
            "#".repeat(row.ciphertext.round() as usize)
        );
    }
}

fn print_help() {
    println!("Type a ciphertext to load it, or one of:");
    println!("  :shift N    decrypt with shift N");
    println!("  :brute      try all shifts");
    println!("  :freq       frequency analysis");
    println!("  :example N  load sample N (1-{})", EXAMPLES.len());
    println!("  :clear      forget the current text");
    println!("  :quit       leave");
}

/// What one line of the interactive session asks for.
#[derive(Debug)]
enum Reply {
    Nothing,
    Quit,
    Help,
    Cleared,
    Loaded(String),
    Decrypted(String),
    Candidates(Vec<DecryptionCandidate>),
    Report(FrequencyReport),
}

#[derive(Default)]
struct Session {
    ciphertext: String,
}

impl Session {
    fn handle(&mut self, line: &str) -> Result<Reply, CipherError> {
        let line = line.trim();
        let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));

        match cmd {
            "" => Ok(Reply::Nothing),
            ":quit" | ":exit" => Ok(Reply::Quit),
            ":help" => Ok(Reply::Help),
            ":clear" => {
                self.ciphertext.clear();
                Ok(Reply::Cleared)
            }
            ":shift" => {
                let shift = arg
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| CipherError::invalid_input(format!("bad shift: {}", e)))?;
                if self.ciphertext.is_empty() {
                    return Err(CipherError::invalid_input("enter some encrypted text first"));
                }
                Ok(Reply::Decrypted(Shift::new(shift).decrypt(&self.ciphertext)))
            }
            ":brute" => brute_force(&self.ciphertext).map(Reply::Candidates),
            ":freq" => analyze_frequency(&self.ciphertext).map(Reply::Report),
            ":example" => {
                let (text, description) = arg
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| EXAMPLES.get(i))
                    .ok_or_else(|| {
                        CipherError::invalid_input(format!(
                            "choose an example between 1 and {}",
                            EXAMPLES.len()
                        ))
                    })?;
                self.ciphertext = text.to_string();
                Ok(Reply::Loaded(format!("{}: {}", description, text)))
            }
            _ if cmd.starts_with(':') => Err(CipherError::invalid_input(format!(
                "unknown command {}",
                cmd
            ))),
            _ => {
                self.ciphertext = line.to_string();
                Ok(Reply::Loaded(self.ciphertext.clone()))
            }
        }
    }
}

fn interactive() -> io::Result<()> {
    let stdin = io::stdin();
    let mut session = Session::default();

    print_help();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match session.handle(&input) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Nothing) => {}
            Ok(Reply::Help) => print_help(),
            Ok(Reply::Cleared) => println!("Cleared."),
            Ok(Reply::Loaded(text)) => println!("Loaded {}", text),
            Ok(Reply::Decrypted(text)) => println!("{}", text),
            Ok(Reply::Candidates(candidates)) => print_candidates(&candidates),
            Ok(Reply::Report(report)) => print_report(&report, TOP_LETTERS),
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}
