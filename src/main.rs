use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_add, handle_budget, handle_delete, handle_list, handle_savings_use, handle_summary,
    PeriodArgs,
};
use spendlog::config::{paths::TrackerPaths, settings::Settings};
use spendlog::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense tracker with budget-vs-actual summaries",
    long_about = "spendlog records expenses to a plain text store and reports \
                  spending against a per-category budget derived from your \
                  income and savings goal, including a daily spending limit \
                  for the current month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Expense name
        name: String,
        /// Amount (e.g., "150" or "150.00")
        amount: String,
        /// Category label, or its 1-based position in the core list
        #[arg(short, long)]
        category: String,
    },

    /// List all recorded expenses with their positions
    List,

    /// Delete an expense by its 1-based position ('c' cancels)
    Delete {
        /// Record number shown by 'list', or 'c' to cancel
        selection: String,
    },

    /// Record money taken out of savings
    SavingsUse {
        /// Amount taken from savings
        amount: String,
        /// Brief reason (e.g., "Emergency Car Repair")
        reason: String,
    },

    /// Derive and show the per-category budget for a session
    Budget {
        /// Total money/income for the month
        #[arg(short, long)]
        income: String,
        /// Desired savings goal; defaults to 20% of income
        #[arg(short, long)]
        savings_goal: Option<String>,
    },

    /// Show the budget-vs-actual summary for a period
    Summary {
        /// Total money/income for the month
        #[arg(short, long)]
        income: String,
        /// Desired savings goal; defaults to 20% of income
        #[arg(short, long)]
        savings_goal: Option<String>,
        /// Month (1-12); defaults to the current month
        #[arg(short, long)]
        month: Option<u32>,
        /// Year (e.g., 2024); defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
        /// Summarize every record regardless of period
        #[arg(long, conflicts_with_all = ["month", "year"])]
        all: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;
    let store = ExpenseStore::new(paths.expenses_file());

    match cli.command {
        Some(Commands::Add {
            name,
            amount,
            category,
        }) => {
            handle_add(&store, &settings, &name, &amount, &category)?;
        }
        Some(Commands::List) => {
            handle_list(&store, &settings)?;
        }
        Some(Commands::Delete { selection }) => {
            handle_delete(&store, &selection)?;
        }
        Some(Commands::SavingsUse { amount, reason }) => {
            handle_savings_use(&store, &settings, &amount, &reason)?;
        }
        Some(Commands::Budget {
            income,
            savings_goal,
        }) => {
            handle_budget(&settings, &income, savings_goal.as_deref())?;
        }
        Some(Commands::Summary {
            income,
            savings_goal,
            month,
            year,
            all,
        }) => {
            handle_summary(
                &store,
                &settings,
                &income,
                savings_goal.as_deref(),
                PeriodArgs { month, year, all },
            )?;
        }
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Expense store:    {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Core categories: {}", settings.categories.core().join(", "));
            println!("  Savings:         {}", settings.categories.savings());
            println!("  Savings use:     {}", settings.categories.savings_use());
        }
        None => {
            println!("spendlog - expense tracking with budget summaries");
            println!();
            println!("Run 'spendlog --help' for usage information.");
        }
    }

    Ok(())
}
