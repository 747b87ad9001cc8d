pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use config::TalkerConfig;
use services::TalkerRepository;

pub use startup::{build_router, Application};

#[derive(Clone)]
pub struct AppState {
    pub repository: TalkerRepository,
}

impl AppState {
    pub fn new(config: &TalkerConfig) -> Self {
        Self {
            repository: TalkerRepository::new(config.data_file.clone()),
        }
    }
}
