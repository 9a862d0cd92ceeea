//! Open Banking CLI command line interface

pub mod command;
pub mod table;

use chrono::NaiveDate;
use clap::{command, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the stored access token
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Accounts the token grants access to
    #[command(subcommand)]
    Accounts(AccountCommands),

    /// Balances across all accounts
    #[command(subcommand)]
    Balances(BalanceCommands),

    /// Transactions across all accounts
    #[command(subcommand)]
    Transactions(TransactionCommands),

    /// Beneficiaries
    #[command(subcommand)]
    Beneficiaries(BeneficiaryCommands),

    /// Direct debits
    #[command(subcommand)]
    DirectDebits(DirectDebitCommands),

    /// Standing orders
    #[command(subcommand)]
    StandingOrders(StandingOrderCommands),

    /// Account statements
    #[command(subcommand)]
    Statements(StatementCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Store an access token and its expiry
    Set {
        /// The bearer access token
        #[arg(long)]
        token: Option<String>,

        /// Token expiry, in milliseconds since the Unix epoch
        #[arg(long)]
        expiry: Option<i64>,
    },

    /// Show the stored settings
    Show,

    /// Clear the stored settings (WARNING: This removes the saved token!)
    Clear,
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// List all accounts
    List {
        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single account
    Get {
        account_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the balances of an account
    Balances {
        account_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the transactions of an account
    Transactions {
        account_id: String,

        /// Earliest booking date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest booking date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum BalanceCommands {
    /// List balances across all accounts
    List {
        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions across all accounts
    List {
        /// Earliest booking date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest booking date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single transaction
    Get {
        transaction_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum BeneficiaryCommands {
    /// List beneficiaries across all accounts
    List {
        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the beneficiaries of an account
    Account {
        account_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum DirectDebitCommands {
    /// List direct debits across all accounts
    List {
        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the direct debits of an account
    Account {
        account_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum StandingOrderCommands {
    /// List standing orders across all accounts
    List {
        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the standing orders of an account
    Account {
        account_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum StatementCommands {
    /// List the statements of an account
    List {
        account_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single statement
    Get {
        account_id: String,
        statement_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the transactions covered by a statement
    Transactions {
        account_id: String,
        statement_id: String,

        /// Emit the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use clap::Parser;

    use super::{AccountCommands, Cli, Commands, DirectDebitCommands};

    #[test]
    fn date_bounds_parse_as_iso_dates() {
        // Arrange / Act
        let cli = Cli::try_parse_from([
            "openbanking-cli",
            "accounts",
            "transactions",
            "acc-1",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
        ])
        .unwrap();

        // Assert
        let Commands::Accounts(AccountCommands::Transactions { from, to, json, .. }) = cli.command
        else {
            panic!("parsed into the wrong command");
        };
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert!(!json);
    }

    #[test]
    fn invalid_dates_are_rejected_at_parse_time() {
        let result = Cli::try_parse_from([
            "openbanking-cli",
            "transactions",
            "list",
            "--from",
            "January 1st",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn kebab_case_groups_parse() {
        let cli =
            Cli::try_parse_from(["openbanking-cli", "direct-debits", "account", "acc-1", "--json"])
                .unwrap();

        let Commands::DirectDebits(DirectDebitCommands::Account { account_id, json }) = cli.command
        else {
            panic!("parsed into the wrong command");
        };
        assert_eq!(account_id, "acc-1");
        assert!(json);
    }
}
