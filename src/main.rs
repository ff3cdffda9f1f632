use clap::Parser;
use executor_report::config::resolve;
use executor_report::utils::logger;
use executor_report::{render_report, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting executor-report");
    tracing::debug!("CLI config: {:?}", cli);

    let (sort, source) = match resolve(&cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Sorting clients by {}", sort);
    let output = render_report(&source, sort).await;
    println!("{}", output);
}
