pub mod defaults;
pub mod settings;
pub mod user;

pub use defaults::{default_settings, default_settings_toml};
pub use settings::HighlightSettings;
pub use user::{load_user_config, user_config_path};
