use alerter_config::AppConfig;
use clap::Parser;

pub mod seeder;

#[derive(Parser, Debug, Default)]
#[command(name = "college-alerter")]
#[command(version, about = "College Alerter - console college portal", long_about = None)]
pub struct Cli {
    /// Start without the demo student, teacher and staff accounts
    #[arg(long)]
    pub no_demo_users: bool,

    /// Never clear the screen between views
    #[arg(long)]
    pub no_clear: bool,

    /// Log level for application events (overrides LOG_LEVEL)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Layers command-line flags over the environment configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.no_demo_users {
            config.demo_users = false;
        }
        if self.no_clear {
            config.clear_screen = false;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}
