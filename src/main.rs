use clap::Parser;
use salesdesk::core::engine::DashboardReport;
use salesdesk::domain::model::{FeedbackForm, SaleForm};
use salesdesk::domain::ports::ConfigProvider;
use salesdesk::utils::{logger, validation::Validate};
use salesdesk::{CliCommand, CliConfig, InsightEngine, LocalStorage, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting salesdesk CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let command = config.command.clone();
    let config_path = config.config.clone();

    let result = match config_path {
        Some(path) => {
            let file_config = TomlConfig::from_file(&path)?;
            file_config.validate()?;
            let storage = LocalStorage::new(file_config.data_dir().to_string());
            run(InsightEngine::new(storage, file_config), &command)
        }
        None => {
            let storage = LocalStorage::new(config.data_dir.clone());
            run(InsightEngine::new(storage, config), &command)
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run<C: ConfigProvider>(
    engine: InsightEngine<LocalStorage, C>,
    command: &CliCommand,
) -> salesdesk::Result<()> {
    match command {
        CliCommand::Report { json } => {
            let report = engine.dashboard()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        CliCommand::AddSale {
            salesperson,
            customer,
            email,
            product,
            quantity,
            amount,
            timestamp,
        } => {
            let timestamp = timestamp.clone().unwrap_or_else(|| {
                chrono::Local::now().format("%Y-%m-%d %I:%M %p").to_string()
            });
            let record = engine.submit_sale(SaleForm {
                timestamp,
                salesperson: salesperson.clone(),
                customer_name: customer.clone(),
                customer_email: email.clone(),
                product: product.clone(),
                quantity: *quantity,
                amount: *amount,
            })?;
            println!(
                "✅ New sale added for {} - {} ({} units) - ${}",
                customer,
                product,
                record.quantity.unwrap_or_default(),
                record.amount.unwrap_or_default()
            );
        }
        CliCommand::AddFeedback {
            customer,
            product,
            rating,
            text,
        } => {
            let record = engine.submit_feedback(FeedbackForm {
                customer_name: customer.clone(),
                product: product.clone(),
                rating: *rating,
                feedback_text: text.clone(),
            })?;
            println!("✅ Feedback submitted ({} sentiment)", record.sentiment);
        }
    }

    Ok(())
}

fn print_report(report: &DashboardReport) {
    println!("=== KPIs ===");
    println!("Total Sales:  {:.2}", report.kpis.total_sales);
    println!("Transactions: {}", report.kpis.transactions);
    println!("Top Seller:   {}", report.kpis.top_salesperson);
    println!("Units Sold:   {}", report.kpis.total_units);

    println!("\n=== Revenue by Salesperson ===");
    for row in &report.revenue_by_salesperson {
        println!("{:<20} {:>10.2}", row.key, row.total);
    }

    println!("\n=== Units by Product ===");
    for row in &report.units_by_product {
        println!("{:<20} {:>10}", row.key, row.total);
    }

    println!("\n=== Revenue by Date ===");
    for row in &report.revenue_by_date {
        println!("{:<12} {:>10.2}", row.key, row.total);
    }

    println!("\n=== Feedback Sentiment ===");
    for (label, count) in report.sentiment.rows() {
        println!("{:<10} {}", label.to_string(), count);
    }

    println!(
        "\n{} sales records, {} feedback records on file",
        report.sales.len(),
        report.feedback.len()
    );
}
