mod loader;
mod schema;

#[cfg(test)]
mod tests;

pub use loader::{
    ConfigStatus, config_path_in, get_config_path, load_config_from, load_or_init,
    load_or_init_at, write_default_config,
};
pub use schema::Config;
