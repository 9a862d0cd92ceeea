use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;

use openbanking_cli::cli::{
    command, AccountCommands, BalanceCommands, BeneficiaryCommands, Cli, Commands, ConfigCommands,
    DirectDebitCommands, StandingOrderCommands, StatementCommands, TransactionCommands,
};
use openbanking_cli::error::AppErrors as Error;
use openbanking_cli::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let subscriber = get_subscriber(
        "openbanking-cli".to_string(),
        "warn".to_string(),
        std::io::stderr,
    );
    if let Err(e) = init_subscriber(subscriber) {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Set { token, expiry } => command::config::set(token, expiry),
            ConfigCommands::Show => command::config::show(),
            ConfigCommands::Clear => command::config::clear(),
        },

        Commands::Accounts(cmd) => match cmd {
            AccountCommands::List { json } => command::accounts::list(json).await,
            AccountCommands::Get { account_id, json } => {
                command::accounts::get(&account_id, json).await
            }
            AccountCommands::Balances { account_id, json } => {
                command::accounts::balances(&account_id, json).await
            }
            AccountCommands::Transactions {
                account_id,
                from,
                to,
                json,
            } => command::accounts::transactions(&account_id, from, to, json).await,
        },

        Commands::Balances(cmd) => match cmd {
            BalanceCommands::List { json } => command::balances::list(json).await,
        },

        Commands::Transactions(cmd) => match cmd {
            TransactionCommands::List { from, to, json } => {
                command::transactions::list(from, to, json).await
            }
            TransactionCommands::Get {
                transaction_id,
                json,
            } => command::transactions::get(&transaction_id, json).await,
        },

        Commands::Beneficiaries(cmd) => match cmd {
            BeneficiaryCommands::List { json } => command::beneficiaries::list(json).await,
            BeneficiaryCommands::Account { account_id, json } => {
                command::beneficiaries::account(&account_id, json).await
            }
        },

        Commands::DirectDebits(cmd) => match cmd {
            DirectDebitCommands::List { json } => command::direct_debits::list(json).await,
            DirectDebitCommands::Account { account_id, json } => {
                command::direct_debits::account(&account_id, json).await
            }
        },

        Commands::StandingOrders(cmd) => match cmd {
            StandingOrderCommands::List { json } => command::standing_orders::list(json).await,
            StandingOrderCommands::Account { account_id, json } => {
                command::standing_orders::account(&account_id, json).await
            }
        },

        Commands::Statements(cmd) => match cmd {
            StatementCommands::List { account_id, json } => {
                command::statements::list(&account_id, json).await
            }
            StatementCommands::Get {
                account_id,
                statement_id,
                json,
            } => command::statements::get(&account_id, &statement_id, json).await,
            StatementCommands::Transactions {
                account_id,
                statement_id,
                json,
            } => command::statements::transactions(&account_id, &statement_id, json).await,
        },
    }
}
