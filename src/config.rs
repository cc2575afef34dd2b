// src/config.rs
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global config — loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub stash_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub allow_insecure_export: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("PWS_CONFIG").unwrap_or_else(|_| "pw-stash.toml".to_string());

        let mut conf: Config = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read pw-stash.toml");
            toml::from_str(&content).expect("Invalid TOML in pw-stash.toml")
        } else {
            Config {
                paths: Paths {
                    stash_dir: default_stash_dir(),
                },
                features: Features {
                    allow_insecure_export: false,
                },
            }
        };

        // Env overrides beat whatever the file says
        if let Ok(dir) = std::env::var("PWS_STASH_DIR") {
            conf.paths.stash_dir = dir;
        }
        if std::env::var("PWS_ALLOW_INSECURE_EXPORT").is_ok() {
            conf.features.allow_insecure_export = true;
        }

        conf
    })
}

fn default_stash_dir() -> String {
    dirs::data_dir()
        .map(|d| d.join("pw-stash"))
        .unwrap_or_else(|| PathBuf::from(".pw-stash"))
        .to_string_lossy()
        .into_owned()
}
