use config::{Config, Environment, File, FileFormat};
use std::fs;

use crate::countries::DEFAULT_TRANSLATION;
use crate::dataset::DatasetVariant;

fn default_translation() -> String {
    DEFAULT_TRANSLATION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Settings {
    // Which bundled dataset to load - emoji or image flags
    pub dataset_variant: DatasetVariant,
    // Optional JSON file replacing the bundled dataset
    #[serde(default)]
    pub dataset_path: Option<String>,
    // What environment - dev, stage, prod
    pub environment: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_translation")]
    pub translation: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait HasFile {
    fn file(&self) -> &str;
}
pub struct SettingsFile {}
impl HasFile for SettingsFile {
    fn file(&self) -> &str {
        "settings.yaml"
    }
}

fn _get_settings(settings: impl HasFile) -> Settings {
    let mut builder = Config::builder();
    // Either we use a settings.yaml file, or environment variables
    let settings_file = settings.file();
    builder = match fs::metadata(settings_file) {
        Ok(metadata) => match metadata.is_file() {
            true => builder.add_source(File::new(settings_file, FileFormat::Yaml)),
            false => panic!("Given settings file is not a file"),
        },
        Err(error) => match error.kind() {
            std::io::ErrorKind::NotFound => builder.add_source(Environment::default()),
            _ => panic!("Unexpected error when loading metadata."),
        },
    };
    let config = builder.build().expect("Config couldn't be built.");
    match config.try_deserialize::<Settings>() {
        Ok(settings) => settings,
        Err(e) => panic!("Config didn't match serialization. {:?}", e),
    }
}

pub fn get_settings() -> Settings {
    _get_settings(SettingsFile {})
}
