use std::io::{self, BufRead, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use zeroize::Zeroizing;

use shamir_vault::cli::{Cli, Commands};
use shamir_vault::commands::{combine_plain, keygen, recover, seal_secret, split_plain};
use shamir_vault::config::VaultConfig;
use shamir_vault::domain::{ShareCount, SplitConfig, Threshold, XCoordinates};
use shamir_vault::vault::Keyring;

/// Read a secret securely from stdin (hidden input when TTY available)
fn read_secret() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret:");
        rpassword::read_password()
            .map(Zeroizing::new)
            .context("Failed to read secret from stdin")
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = Zeroizing::new(String::new());
        handle
            .read_line(&mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(Zeroizing::new(
            secret.trim_end_matches(['\r', '\n']).to_string(),
        ))
    }
}

/// Read plain-text shares from stdin, two lines per share
/// Interactive input ends at the first empty line
fn read_shares() -> Result<Zeroizing<String>> {
    let mut text = Zeroizing::new(String::new());

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (x and y on separate lines, empty line to finish):");

        loop {
            let line = Zeroizing::new(
                rpassword::read_password().context("Failed to read share from stdin")?,
            );
            if line.trim().is_empty() {
                break;
            }
            text.push_str(line.trim());
            text.push('\n');
        }
    } else {
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("Failed to read shares from stdin")?;
    }

    Ok(text)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            random_x,
        } => {
            let secret = read_secret()?;

            let share_count = ShareCount::new(shares)?;
            let x_coordinates = if random_x {
                XCoordinates::Random
            } else {
                XCoordinates::Sequential
            };
            let config =
                SplitConfig::new(share_count, threshold.and_then(Threshold::requested))?
                    .with_x_coordinates(x_coordinates);

            print!("{}", split_plain(&secret, config)?.as_str());
        }
        Commands::Combine => {
            let shares = read_shares()?;
            println!("{}", combine_plain(&shares)?.as_str());
        }
        Commands::Keygen { contact, out } => {
            let (path, entry) = keygen(&contact, &out)?;
            eprintln!("Private key written to {}", path.display());
            let snippet = VaultConfig {
                custodians: vec![entry],
                ..VaultConfig::default()
            };
            print!("{}", snippet.to_toml()?);
        }
        Commands::Seal { config } => {
            let config = VaultConfig::load(&config)?;
            let secret = read_secret()?;
            println!("{}", seal_secret(&secret, &config)?);
        }
        Commands::Recover { keys, records } => {
            let keyring = Keyring::load(keys.as_slice()).await?;
            let records_json = match records {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read records {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .lock()
                        .read_to_string(&mut buf)
                        .context("Failed to read records from stdin")?;
                    buf
                }
            };
            println!("{}", recover(&records_json, &keyring).await?.as_str());
        }
    }

    Ok(())
}
