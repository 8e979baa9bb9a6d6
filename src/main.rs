use clap::Parser;
use house_price_form::config::Messages;
use house_price_form::utils::logger;
use house_price_form::{CliConfig, FormController, HttpPredictionService, MemoryPage, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting house-price-form CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message(&Messages::default()));
            std::process::exit(4);
        }
    };

    let service = HttpPredictionService::from_config(&settings);
    let mut controller = FormController::new(MemoryPage::house_form(), service, settings);

    // 依序填入欄位；area 與瀏覽器一樣在變更時即時檢查，超出範圍就不送出
    controller.page_mut().fill(&config.form_values());
    let outcome = controller.submit_entered().await;
    print!("{}", controller.page());

    let exit_code = match outcome {
        SubmitOutcome::Estimated(_) => 0,
        SubmitOutcome::Invalid(e) => {
            tracing::debug!("💡 {}", e.recovery_suggestion());
            1
        }
        SubmitOutcome::Rejected(_) => 2,
        SubmitOutcome::Unreachable(e) => {
            tracing::debug!("💡 {}", e.recovery_suggestion());
            3
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
