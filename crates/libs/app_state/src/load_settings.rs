use crate::{AppConstants, AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;
use std::sync::LazyLock;

fn load_raw_settings() -> Result<RawSettings> {
    // Load .env first so it can overwrite the database url from the yaml file.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    Ok(builder.build()?.try_deserialize::<RawSettings>()?)
}

pub fn load_app_settings() -> Result<AppSettings> {
    Ok(load_raw_settings()?.into())
}

pub static CONSTANTS: LazyLock<AppConstants> =
    LazyLock::new(|| load_raw_settings().expect("Cannot load app settings.").into());

#[must_use]
pub fn constants() -> &'static AppConstants {
    &CONSTANTS
}
