use clap::Parser;
use doi_mds::config::{self, SERVICE_URL_KEY};
use doi_mds::utils::error::EXIT_CHECK_FAILED;
use doi_mds::utils::{logger, validation};
use doi_mds::{Cli, Command, DoiClient, DoiRecord, ReqwestTransport, Result, TracingLog};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 失敗訊息已由 TracingLog 記錄，這裡只輸出給使用者
    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            if let Some(hint) = e.recovery_suggestion() {
                eprintln!("💡 {}", hint);
            }
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    let config = config::load(cli.config.as_deref())?;

    let transport = match cli.timeout {
        Some(seconds) => ReqwestTransport::with_timeout(Duration::from_secs(seconds))?,
        None => ReqwestTransport::new(),
    };

    let client = DoiClient::new(&config, transport, Some(Arc::new(TracingLog)))?;
    validation::validate_url(SERVICE_URL_KEY, client.settings().service_url())?;
    validation::validate_doi("doi", cli.command.doi())?;

    match cli.command {
        Command::Register { doi, metadata, url } => {
            let record = DoiRecord::from_metadata_file(doi, url, &metadata)?;
            client.register_record(&record).await?;
            tracing::info!("✅ Registered {} -> {}", record.doi, record.landing_page_url);
            println!("✅ Registered {} -> {}", record.doi, record.landing_page_url);
            println!("⏳ DataCite may take several hours until the DOI resolves");
        }
        Command::Check { doi, url } => {
            if client.check_doi(&doi, &url).await? {
                println!("✅ {} resolves to {}", doi, url);
            } else {
                println!("❌ {} does not resolve to {} (yet)", doi, url);
                return Ok(EXIT_CHECK_FAILED);
            }
        }
        Command::Update { doi, url } => {
            client.update_url_for_doi(&doi, &url).await?;
            tracing::info!("✅ Updated {} -> {}", doi, url);
            println!("✅ Updated {} -> {}", doi, url);
        }
        Command::Delete { doi } => {
            client.delete_metadata_for_doi(&doi).await?;
            tracing::info!("✅ Metadata of {} marked inactive", doi);
            println!("✅ Metadata of {} marked inactive", doi);
        }
    }

    Ok(0)
}
