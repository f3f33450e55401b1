use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shamir-vault")]
#[command(about = "Split short secrets into threshold shares sealed to custodian keys")]
pub struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret read from stdin into plain-text shares
    Split {
        /// Number of shares to create
        #[arg(short, long)]
        shares: u8,

        /// Minimum number of shares needed to reconstruct (0 or omitted: a majority)
        #[arg(short, long)]
        threshold: Option<u8>,

        /// Sample x-coordinates at random instead of 1..=shares
        #[arg(long)]
        random_x: bool,
    },
    /// Combine plain-text shares read from stdin
    Combine,
    /// Generate a custodian keypair
    Keygen {
        /// Contact identifier for the custodian
        #[arg(short, long)]
        contact: String,

        /// Directory to write the private key PEM into
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Split a secret read from stdin and seal one share per configured custodian
    Seal {
        /// Vault config file listing custodians
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Unseal records with the given private keys and reconstruct the secret
    Recover {
        /// Custodian private key PEM files
        #[arg(short, long = "key", required = true)]
        keys: Vec<PathBuf>,

        /// JSON records file (reads stdin when omitted)
        #[arg(short, long)]
        records: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_threshold(args: &[&str]) -> Option<u8> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Split { threshold, .. } => threshold,
            _ => panic!("expected split"),
        }
    }

    #[test]
    fn test_split_threshold_zero_accepted() {
        assert_eq!(
            split_threshold(&["shamir-vault", "split", "-s", "5", "-t", "0"]),
            Some(0)
        );
        assert_eq!(split_threshold(&["shamir-vault", "split", "-s", "5"]), None);
    }

    #[test]
    fn test_split_threshold_not_a_number() {
        assert!(Cli::try_parse_from(["shamir-vault", "split", "-s", "5", "-t", "x"]).is_err());
    }
}
