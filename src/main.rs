use clap::Parser;
use small_demo::utils::logger;
use small_demo::{CliArgs, DemoRunner, Logger};

fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let level = config.log_level();
    let runner = DemoRunner::new(config, Logger::stdout(level));
    let report = runner.run();

    println!(
        "✅ Demo finished: {} connections, {} expressions, {} requests recorded",
        report.connections.len(),
        report.evaluations.len(),
        report.requests_recorded
    );
}
