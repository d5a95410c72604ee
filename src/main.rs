use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use creature_battle::{run_battle, BattleStore, Config, ConfigOverrides, CreatureCache, HttpCatalog, VERSION};

#[derive(Parser)]
#[command(name = "creature-battle", version = VERSION)]
#[command(about = "Fetch two Pokemon, compare their base stats, record the winner", long_about = None)]
struct Cli {
    /// First Pokemon (prompted for when omitted)
    first: Option<String>,

    /// Second Pokemon (prompted for when omitted)
    second: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite file for battle results
    #[arg(long)]
    db: Option<PathBuf>,

    /// Catalog base URL
    #[arg(long)]
    api_base_url: Option<String>,

    /// Hash names exactly as typed instead of lowercasing them first
    #[arg(long)]
    case_sensitive_keys: bool,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_overrides(ConfigOverrides {
        database_path: cli.db,
        api_base_url: cli.api_base_url,
        case_sensitive_keys: cli.case_sensitive_keys,
        timeout_secs: cli.timeout_secs,
    });
    debug!(?config, "resolved config");

    let first = match cli.first {
        Some(name) => name,
        None => prompt("Enter the name of the first Pokemon: ")?,
    };
    let second = match cli.second {
        Some(name) => name,
        None => prompt("Enter the name of the second Pokemon: ")?,
    };

    let store = BattleStore::new(&config.database_path);
    let catalog = HttpCatalog::with_base_url(&config.api_base_url, config.timeout())
        .context("Failed to create HTTP client")?;
    let mut cache = CreatureCache::new(config.key_policy);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_battle(&store, &mut cache, &catalog, &first, &second, &mut out)?;

    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_from(&mut stdin.lock(), &mut stdout.lock(), message)
}

/// Print `message`, then read one line without its terminator.
/// End of input is an error, not an empty name.
fn prompt_from<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        bail!("no input on stdin");
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_terminator() {
        let mut input = Cursor::new("Pikachu\r\nEevee\n");
        let mut output = Vec::new();

        let first = prompt_from(&mut input, &mut output, "first: ").unwrap();
        let second = prompt_from(&mut input, &mut output, "second: ").unwrap();

        assert_eq!(first, "Pikachu");
        assert_eq!(second, "Eevee");
        assert_eq!(String::from_utf8(output).unwrap(), "first: second: ");
    }

    #[test]
    fn test_prompt_at_end_of_input_is_error() {
        let mut input = Cursor::new("pikachu\n");
        let mut output = Vec::new();

        prompt_from(&mut input, &mut output, "first: ").unwrap();
        let err = prompt_from(&mut input, &mut output, "second: ").unwrap_err();

        assert!(err.to_string().contains("no input on stdin"));
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        assert_eq!(prompt_from(&mut input, &mut output, "first: ").unwrap(), "");
    }
}
