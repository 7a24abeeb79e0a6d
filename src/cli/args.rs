//! CLI argument definitions using clap
//!
//! Commands:
//! - stockroom init
//! - stockroom add --name <n> --category <c> --price <p> --quantity <q>
//! - stockroom update <id> [--name] [--category] [--price] [--quantity]
//! - stockroom remove <id> | get <id> | list | categories | clear
//! - stockroom filter [--search] [--category] [--stock low|out|available]
//! - stockroom report <stats|low-stock|by-category|top|breakdown|all>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::model::RecordId;
use crate::report::DEFAULT_TOP_LIMIT;

/// stockroom - an inventory ledger with derived stock reports
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and an empty inventory slot
    Init,

    /// Add a record
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Change only the given fields of a record
    Update {
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,
    },

    /// Remove a record
    Remove { id: RecordId },

    /// Show one record
    Get { id: RecordId },

    /// List every record in insertion order
    List,

    /// List records matching all given criteria
    Filter {
        /// Case-insensitive name substring
        #[arg(long, default_value = "")]
        search: String,
        /// Exact category id
        #[arg(long, default_value = "")]
        category: String,
        /// low, out or available; anything else is ignored
        #[arg(long, default_value = "")]
        stock: String,
    },

    /// List configured categories
    Categories,

    /// Compute a report over the current inventory
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },

    /// Drop every record and delete the slot
    Clear,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ReportKind {
    /// Aggregate counters and totals
    Stats,
    /// Records at or under the low threshold
    LowStock,
    /// Records grouped by category
    ByCategory,
    /// Highest total value first
    Top {
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
    /// Per-category count, value and share of the grand total
    Breakdown,
    /// Every report at once
    All {
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_add() {
        let cli = Cli::try_parse_from([
            "stockroom", "add", "--name", "Gauze", "--category", "clinical_supplies", "--price",
            "2.5", "--quantity", "40",
        ])
        .unwrap();

        match cli.command {
            Command::Add { name, quantity, .. } => {
                assert_eq!(name, "Gauze");
                assert_eq!(quantity, 40);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = Cli::try_parse_from([
            "stockroom", "add", "--name", "X", "--category", "c", "--price", "1", "--quantity",
            "-3",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Add { quantity: -3, .. }));
    }

    #[test]
    fn test_parses_report_top_with_global_config() {
        let cli = Cli::try_parse_from([
            "stockroom", "report", "top", "--limit", "3", "--config", "x.json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Report { kind: ReportKind::Top { limit: 3 } }
        ));
        assert_eq!(cli.config, PathBuf::from("x.json"));
    }

    #[test]
    fn test_update_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["stockroom", "update", "abc"]).is_err());
    }
}
