use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use cross_xdg::BaseDirs;

/// Environment variable that points at a config file, overriding the XDG location.
pub const CONFIG_ENV: &str = "BFGEN_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Default for `--clear`.
    pub clear_cell: bool,
    /// Default for `--placeholder`.
    pub placeholder: Option<String>,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| load_from_toml().unwrap_or_default())
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    // On Linux: resolves to /home/<user>/.config
    // On Windows: resolves to C:\Users\<user>\.config
    // On macOS: resolves to /Users/<user>/.config
    let base_dirs = BaseDirs::new().ok()?;
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push("bfgen.toml");
    Some(path)
}

fn load_from_toml() -> Option<Settings> {
    let content = fs::read_to_string(config_path()?).ok()?;
    Some(parse_settings(&content))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Read the `[generate]` section of a `bfgen.toml`.
///
/// Very small hand-rolled parser: `key = value` pairs, values quoted or bare.
/// Unknown keys, other sections and malformed lines are ignored.
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    let mut in_generate = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if line.starts_with('[') && line.ends_with(']') {
            in_generate = line[1..line.len() - 1].trim() == "generate";
            continue;
        }
        if !in_generate { continue; }

        let Some((key, raw)) = line.split_once('=') else { continue };
        let raw = raw.trim();
        let value = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            &raw[1..raw.len() - 1]
        } else {
            raw
        };

        match key.trim() {
            "clear_cell" => {
                if let Some(b) = parse_bool(value) { settings.clear_cell = b; }
            }
            "placeholder" => settings.placeholder = Some(value.to_string()),
            _ => {}
        }
    }

    settings
}
