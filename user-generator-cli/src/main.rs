use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgEnum, ErrorKind, Parser};
use log::{debug, error, warn};

use user_generator::generator::{Generator, DEFAULT_COUNT, DEFAULT_FILENAME};
use user_generator::user::{EmailFormat, NameSet};

#[derive(Clone, Copy, ArgEnum)]
enum Names {
    Latin,
    Arabic,
}

/// Generates a CSV of test users for a JMeter registration load test
#[derive(Parser)]
#[clap(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Number of users to generate [default: 100]
    #[clap(parse(try_from_str = parse_count))]
    pub(crate) number_of_users: Option<i64>,

    /// Where to write the CSV file
    #[clap(short, long, default_value = DEFAULT_FILENAME)]
    pub(crate) output: PathBuf,

    /// Which name lists to draw first and last names from
    #[clap(long, arg_enum, default_value = "latin")]
    pub(crate) names: Names,

    /// Append the current Unix time to every email, e.g. user1_1700000000@test.com
    #[clap(long)]
    pub(crate) timestamp: bool,

    /// Anything after the count is ignored
    #[clap(hide = true)]
    pub(crate) ignored: Vec<String>,
}

const NOT_AN_INTEGER: &str = "Number of users must be an integer";

/// Parses the user count the way a lenient integer literal reads: surrounding
/// whitespace, an optional sign, and single `_` separators between digits.
fn parse_count(value: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let well_formed = body
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return Err(NOT_AN_INTEGER.to_string());
    }

    let digits: String = body.chars().filter(|&c| c != '_').collect();
    let magnitude = if negative { format!("-{digits}") } else { digits };
    magnitude
        .parse()
        .map_err(|_| format!("Number of users is out of range: {trimmed}"))
}

impl From<Names> for NameSet {
    fn from(names: Names) -> Self {
        match names {
            Names::Latin => NameSet::Latin,
            Names::Arabic => NameSet::Arabic,
        }
    }
}

impl Cli {
    /// Negative counts behave like zero: the file only gets a header.
    fn count(&self) -> u64 {
        match self.number_of_users {
            None => DEFAULT_COUNT,
            Some(n) => u64::try_from(n).unwrap_or_else(|_| {
                warn!("Requested {} users, writing a header-only file", n);
                0
            }),
        }
    }

    fn email_format(&self) -> EmailFormat {
        if self.timestamp {
            EmailFormat::stamped_now()
        } else {
            EmailFormat::Plain
        }
    }
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) if e.kind() == ErrorKind::ValueValidation => {
            match e.source() {
                Some(reason) => eprintln!("❌ Error: {reason}"),
                None => eprintln!("❌ Error: {NOT_AN_INTEGER}"),
            }
            process::exit(1);
        }
        Err(e) => {
            eprint!("{e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if !cli.ignored.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }
    let generator = Generator::new(cli.names.into(), cli.email_format());
    let written = generator.generate(cli.count(), &cli.output)?;

    println!("✅ Generated {} users in {}", written, cli.output.display());
    println!("📝 File ready to use in JMeter CSV Data Set Config");

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = parse_cli();
    if let Err(e) = run(&cli) {
        error!("Generation failed: {:?}", e);
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}
