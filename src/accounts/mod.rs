pub mod config;
pub mod types;

pub use config::{load_config, save_config};
pub use types::{AccountsConfig, User, UserId};
