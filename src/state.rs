use alerter_config::AppConfig;
use alerter_core::AppError;
use alerter_db::Store;

use crate::cli::seeder::seed_demo_users;

/// Everything the menus read and write, owned by the main loop and passed
/// down by reference.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Store::new(),
            config,
        }
    }
}

/// Builds the state for a run, seeding demo accounts when configured.
pub fn init_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let mut state = AppState::new(config);
    if state.config.demo_users {
        let seeded = seed_demo_users(&mut state.store)?;
        tracing::info!(seeded, "Demo accounts registered");
    }
    Ok(state)
}
