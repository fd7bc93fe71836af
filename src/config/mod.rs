mod defaults;
mod loader;
mod network;

pub use defaults::ExplorerConfig;
pub use loader::{ENV_PREFIX, get_default_config, load_configuration, write_config_to};
pub use network::Network;
