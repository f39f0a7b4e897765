//! `cpf config`: the TOML settings file.
//!
//! Lives at `$XDG_CONFIG_HOME/cpf/config.toml` (falling back to
//! `~/.config/cpf/config.toml`); `CPF_CONFIG` points it anywhere else.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cpf_catalog::UpcomingPolicy;
use cpf_content::contact::{is_plausible_email, DEFAULT_DELAY_MS};
use directories::BaseDirs;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

use super::{CommandContext, CommandError, Result};
use crate::output::helpers::DateFormat;

/// Schema version written to new files.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CPF_CONFIG";

/// Keys accepted by `config set`.
const SETTABLE_KEYS: [&str; 6] = [
    "content_dir",
    "upcoming_policy",
    "output.color",
    "output.date_format",
    "contact.recipient",
    "contact.delay_ms",
];

/// Template written by `config edit` when no file exists yet.
const TEMPLATE: &str = r#"# cpf settings. Every key is optional.
version = 1

# Directory whose events.json, projects.json, ... replace the bundled data
# (--content-dir and CPF_CONTENT_DIR take precedence)
# content_dir = "/path/to/content"

# "stored" keeps each event's curated upcoming flag,
# "date" recomputes it from the event date
# upcoming_policy = "stored"

[output]
# color = true              # NO_COLOR and --no-color always win
# date_format = "relative"  # relative | iso | short

[contact]
# recipient = "contacto@cpf.com.py"  # defaults to the club address
# delay_ms = 1500
"#;

/// Parsed settings file.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Missing in older files; treated as the current version.
    #[serde(default = "current_version")]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming_policy: Option<UpcomingPolicy>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

fn current_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            content_dir: None,
            upcoming_policy: None,
            output: OutputConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// `[output]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Kept as text so a bad value only warns instead of failing the load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

/// `[contact]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

impl ContactConfig {
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms.unwrap_or(DEFAULT_DELAY_MS)
    }
}

impl Config {
    /// Reads `path`, returning defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CommandError::Config(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut config: Config = toml::from_str(&text).map_err(|e| {
            CommandError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        config.upgrade();
        Ok(config)
    }

    /// Writes the settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let text = toml::to_string_pretty(self)
            .map_err(|e| CommandError::Config(format!("cannot serialize settings: {}", e)))?;
        fs::write(path, text)
            .map_err(|e| CommandError::Config(format!("cannot write {}: {}", path.display(), e)))
    }

    /// Brings an older schema up to [`CONFIG_VERSION`].
    ///
    /// Version 1 is the first schema, so this only stamps the version.
    fn upgrade(&mut self) {
        self.version = CONFIG_VERSION;
    }

    /// Validates and applies one `key = value` assignment.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "content_dir" => {
                if value.trim().is_empty() {
                    return Err(CommandError::Config("content_dir cannot be empty".into()));
                }
                self.content_dir = Some(PathBuf::from(value));
            }
            "upcoming_policy" => {
                self.upcoming_policy = Some(value.parse().map_err(CommandError::Config)?);
            }
            "output.color" => self.output.color = Some(parse_bool(value)?),
            "output.date_format" => {
                let format: DateFormat = value.parse().map_err(CommandError::Config)?;
                self.output.date_format = Some(format.as_str().to_string());
            }
            "contact.recipient" => {
                if !is_plausible_email(value) {
                    return Err(CommandError::Config(format!(
                        "'{}' is not an email address",
                        value
                    )));
                }
                self.contact.recipient = Some(value.to_string());
            }
            "contact.delay_ms" => {
                let delay = value.parse().map_err(|_| {
                    CommandError::Config(format!(
                        "delay_ms must be a whole number of milliseconds, got '{}'",
                        value
                    ))
                })?;
                self.contact.delay_ms = Some(delay);
            }
            _ => {
                return Err(CommandError::Config(format!(
                    "Unknown config key '{}'. Valid keys: {}",
                    key,
                    SETTABLE_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

/// Location of the settings file.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config"))
            .ok_or_else(|| CommandError::Config("cannot locate a home directory".into()))?,
    };
    Ok(base.join("cpf").join("config.toml"))
}

/// Loads the settings file from its usual location.
pub fn load_config() -> Result<Config> {
    Config::load_from(&get_config_path()?)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(|e| {
            CommandError::Config(format!("cannot create {}: {}", dir.display(), e))
        }),
        _ => Ok(()),
    }
}

/// `config show`: the file location and its effective contents.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    let exists = path.is_file();
    let config = Config::load_from(&path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": exists,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    if ctx.quiet {
        return Ok(());
    }

    let title = format!("Config: {}", path.display());
    if ctx.use_colors {
        println!("{}", title.green().bold());
    } else {
        println!("{}", title);
    }
    if !exists {
        println!("Not created yet; defaults apply. Run 'cpf config edit' or 'cpf config set'.");
        return Ok(());
    }
    let body = toml::to_string_pretty(&config)
        .map_err(|e| CommandError::Config(format!("cannot serialize settings: {}", e)))?;
    println!();
    print!("{}", body);
    Ok(())
}

/// `config edit`: opens the file in `$EDITOR`, seeding it from the template.
pub async fn execute_edit(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if !path.exists() {
        ensure_parent_dir(&path)?;
        fs::write(&path, TEMPLATE).map_err(|e| {
            CommandError::Config(format!("cannot create {}: {}", path.display(), e))
        })?;
        if !ctx.quiet && !ctx.json_output {
            eprintln!("Wrote template to {}", path.display());
        }
    }

    let editor = ["EDITOR", "VISUAL"]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_string());
    if ctx.verbose {
        eprintln!("Running {} {}", editor, path.display());
    }

    // The runtime stays free while the editor holds the terminal.
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .await
        .map_err(|e| CommandError::Config(format!("cannot start editor '{}': {}", editor, e)))?;

    // Catch typos before the next command trips over them.
    let reparsed = Config::load_from(&path);

    if ctx.json_output {
        let output = serde_json::json!({
            "status": if status.success() && reparsed.is_ok() { "success" } else { "error" },
            "editor": editor,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        match (&reparsed, status.success()) {
            (Err(e), _) => ctx.warn(&e.to_string()),
            (Ok(_), false) => eprintln!("{} exited with {}", editor, status),
            (Ok(_), true) => println!("Saved {}", path.display()),
        }
    }
    Ok(())
}

/// Options for `config set`.
pub struct ConfigSetOptions {
    pub key: String,
    pub value: String,
}

/// `config set`: validates one key and writes the file.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let path = get_config_path()?;
    let mut config = Config::load_from(&path)?;
    config.set(&opts.key, &opts.value)?;
    config.save_to(&path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("{} = {}", opts.key, opts.value);
    }
    Ok(())
}

/// `config path`: prints where the file lives.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.is_file(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

/// Accepts true/false, yes/no, on/off and 1/0 in any case.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "expected a boolean (true/false, yes/no, on/off, 1/0), got '{}'",
            s
        ))),
    }
}
