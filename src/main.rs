use clap::Parser;
use exo_habitability::app::render::{render_assessment, render_ranking};
use exo_habitability::app::shell::run_shell;
use exo_habitability::config::toml_config::TomlConfig;
use exo_habitability::config::{Command, LogFormat};
use exo_habitability::core::ConfigProvider;
use exo_habitability::utils::error::ErrorSeverity;
use exo_habitability::utils::{logger, validation::Validate};
use exo_habitability::{AppSettings, CliConfig, HabitabilityApp, HabitabilityError, LocalStorage};

fn exit_with(e: &HabitabilityError) -> ! {
    tracing::error!(
        "❌ Action failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let verbose = cli.verbose;
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(verbose),
        LogFormat::Json => logger::init_json_logger(verbose),
    }

    tracing::info!("🚀 Starting exo-habitability");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(config) = &file_config {
        if let Err(e) = config.validate() {
            exit_with(&e);
        }
    }

    let settings = AppSettings::resolve(file_config.as_ref(), cli.overrides());
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }
    if let Command::Predict(args) = &cli.command {
        if let Err(e) = args.validate() {
            exit_with(&e);
        }
    }

    if settings.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 模型在啟動時載入，失敗即結束
    let monitor_enabled = settings.monitor;
    let storage = LocalStorage::new(".".to_string());
    let app = match HabitabilityApp::start(storage, settings, monitor_enabled).await {
        Ok(app) => app,
        Err(e) => exit_with(&e),
    };

    match &cli.command {
        Command::Predict(args) => match app.assess(args.features()) {
            Ok(assessment) if args.json => match serde_json::to_string_pretty(&assessment) {
                Ok(json) => println!("{}", json),
                Err(e) => exit_with(&HabitabilityError::from(e)),
            },
            Ok(assessment) => print!("{}", render_assessment(&assessment)),
            Err(e) => exit_with(&e),
        },
        Command::Top(_) => {
            let ranked = match app.top_habitable(None).await {
                Ok(ranked) => ranked,
                Err(e) => exit_with(&e),
            };
            print!("{}", render_ranking(&ranked));

            if let Some(path) = app.config().export_path() {
                match app.export_ranking(&ranked, path).await {
                    Ok(written) => println!("📁 Ranking saved to: {}", written),
                    Err(e) => exit_with(&e),
                }
            }
        }
        Command::Interactive => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            if let Err(e) = run_shell(&app, stdin.lock(), &mut stdout).await {
                exit_with(&e);
            }
        }
    }

    app.finish();
    Ok(())
}
