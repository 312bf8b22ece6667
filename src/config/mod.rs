pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "exo-habitability")]
#[command(about = "Predicts exoplanet habitability with a pre-trained model")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the model artifact (JSON)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Path to the planet catalog (CSV or zipped CSV)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Predict habitability for one planet and explain the result
    Predict(PredictArgs),
    /// Rank the catalog and show the most habitable planets
    Top(TopArgs),
    /// Keep the model loaded and accept commands from stdin
    Interactive,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    /// Planet radius (Earth radii)
    #[arg(long, default_value_t = 1.0)]
    pub radius: f64,

    /// Orbital period (days)
    #[arg(long, default_value_t = 365.0)]
    pub period: f64,

    /// Star temperature (K)
    #[arg(long, default_value_t = 5500.0)]
    pub star_temp: f64,

    /// Semi-major axis (AU)
    #[arg(long, default_value_t = 1.0)]
    pub semi_major_axis: f64,

    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(feature = "cli")]
impl PredictArgs {
    pub fn features(&self) -> crate::domain::model::FeatureVector {
        crate::domain::model::FeatureVector::new(
            self.radius,
            self.period,
            self.star_temp,
            self.semi_major_axis,
        )
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for PredictArgs {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::app::input::validate_features(&self.features())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct TopArgs {
    /// Number of planets to show
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Also write the ranking to this path (.csv or .zip)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> settings::SettingsOverrides {
        let (top_n, export_path) = match &self.command {
            Command::Top(args) => (args.count, args.output.clone()),
            _ => (None, None),
        };

        settings::SettingsOverrides {
            model_path: self.model.clone(),
            catalog_path: self.catalog.clone(),
            top_n,
            export_path,
            monitor: self.monitor,
        }
    }
}
