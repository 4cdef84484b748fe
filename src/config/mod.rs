pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub const DEFAULT_SALES_FILE: &str = "sales_data.csv";
pub const DEFAULT_FEEDBACK_FILE: &str = "customer_feedback.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "salesdesk")]
#[command(about = "Sales and feedback aggregation engine")]
pub struct CliConfig {
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, default_value = DEFAULT_SALES_FILE)]
    pub sales_file: String,

    #[arg(long, default_value = DEFAULT_FEEDBACK_FILE)]
    pub feedback_file: String,

    #[arg(long, help = "Load storage settings from a TOML file instead")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the admin dashboard: KPIs, chart tables, history, sentiment
    Report {
        #[arg(long, help = "Emit the report as JSON")]
        json: bool,
    },
    /// Record a new sale
    AddSale {
        #[arg(long)]
        salesperson: String,
        #[arg(long)]
        customer: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        product: String,
        #[arg(long)]
        quantity: i64,
        #[arg(long)]
        amount: f64,
        #[arg(long, help = "Defaults to the current local time")]
        timestamp: Option<String>,
    },
    /// Record customer feedback; sentiment is derived from the text
    AddFeedback {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        product: String,
        #[arg(long)]
        rating: i64,
        #[arg(long, default_value = "")]
        text: String,
    },
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn sales_table(&self) -> &str {
        &self.sales_file
    }

    fn feedback_table(&self) -> &str {
        &self.feedback_file
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_non_empty_string("sales_file", &self.sales_file)?;
        validate_non_empty_string("feedback_file", &self.feedback_file)?;
        Ok(())
    }
}
