use clap::Parser;
use people_report::utils::{logger, validation::Validate};
use people_report::{CliConfig, ConsoleSink, ReportEngine, RosterPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting people-report CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 創建 sink 和管道
    let sink = ConsoleSink::new();
    let pipeline = RosterPipeline::new(sink, config);

    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(_) => {
            tracing::info!("✅ Report completed successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Report failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
