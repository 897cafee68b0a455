use std::env;
use std::path::PathBuf;

const STORAGE_DIR_ENV: &str = "TEMPLE_OPTIONS_STORAGE_DIR";
const MESSAGES_ENV: &str = "TEMPLE_OPTIONS_MESSAGES";
const LOG_FILE_ENV: &str = "TEMPLE_OPTIONS_LOG";
const KEY_DEBUG_ENV: &str = "TEMPLE_OPTIONS_KEY_DEBUG";

pub const USAGE: &str = "\
Usage: temple-options [OPTIONS]

Options:
  --storage-dir <PATH>  Extension storage to clear on reset [env: TEMPLE_OPTIONS_STORAGE_DIR]
  --messages <PATH>     messages.json catalog for the page text [env: TEMPLE_OPTIONS_MESSAGES]
  --log-file <PATH>     Append tracing output to PATH (filter with RUST_LOG) [env: TEMPLE_OPTIONS_LOG]
  -h, --help            Print this help

Environment:
  TEMPLE_OPTIONS_KEY_DEBUG=1  Log every key press at debug level";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsConfig {
    pub storage_dir: PathBuf,
    pub messages_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub key_debug: bool,
    pub show_help: bool,
}

impl OptionsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Flags win over environment variables.
    fn from_sources(
        args: impl IntoIterator<Item = impl AsRef<str>>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect();
        let from_env = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let storage_dir = flag_value(&args, "--storage-dir")?
            .or_else(|| from_env(STORAGE_DIR_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(default_storage_dir);
        let messages_path = flag_value(&args, "--messages")?
            .or_else(|| from_env(MESSAGES_ENV))
            .map(PathBuf::from);
        let log_file = flag_value(&args, "--log-file")?
            .or_else(|| from_env(LOG_FILE_ENV))
            .map(PathBuf::from);
        let key_debug = from_env(KEY_DEBUG_ENV)
            .and_then(|value| parse_bool_like(&value))
            .unwrap_or(false);
        let show_help = args.iter().any(|arg| arg == "-h" || arg == "--help");

        Ok(Self {
            storage_dir,
            messages_path,
            log_file,
            key_debug,
            show_help,
        })
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("temple-wallet")
        .join("storage")
}

fn parse_bool_like(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Last occurrence wins; accepts `--flag value` and `--flag=value`.
fn flag_value(args: &[String], flag: &'static str) -> Result<Option<String>, ConfigError> {
    let prefix = format!("{flag}=");
    let mut value = None;
    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        if let Some(inline) = arg.strip_prefix(&prefix) {
            value = Some(inline.to_string());
            continue;
        }
        if arg == flag {
            match iter.peek() {
                Some(next) if !next.starts_with('-') => {
                    value = iter.next().cloned();
                }
                _ => return Err(ConfigError::MissingValue(flag)),
            }
        }
    }
    Ok(value.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::{parse_bool_like, ConfigError, OptionsConfig};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config(args: &[&str], env: &[(&str, &str)]) -> Result<OptionsConfig, ConfigError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        OptionsConfig::from_sources(args.iter().copied(), |key| env.get(key).cloned())
    }

    #[test]
    fn flags_accept_both_forms() {
        let parsed = config(
            &["--storage-dir", "/data/storage", "--messages=/i18n/ja.json"],
            &[],
        )
        .expect("config");
        assert_eq!(parsed.storage_dir, PathBuf::from("/data/storage"));
        assert_eq!(parsed.messages_path, Some(PathBuf::from("/i18n/ja.json")));
        assert_eq!(parsed.log_file, None);
        assert!(!parsed.show_help);
    }

    #[test]
    fn flags_override_environment() {
        let parsed = config(
            &["--log-file=/tmp/flag.log"],
            &[
                ("TEMPLE_OPTIONS_LOG", "/tmp/env.log"),
                ("TEMPLE_OPTIONS_STORAGE_DIR", "/env/storage"),
                ("TEMPLE_OPTIONS_KEY_DEBUG", "yes"),
            ],
        )
        .expect("config");
        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/flag.log")));
        assert_eq!(parsed.storage_dir, PathBuf::from("/env/storage"));
        assert!(parsed.key_debug);
    }

    #[test]
    fn missing_flag_value_is_an_error() {
        assert_eq!(
            config(&["--storage-dir"], &[]),
            Err(ConfigError::MissingValue("--storage-dir"))
        );
        assert_eq!(
            config(&["--messages", "--help"], &[]),
            Err(ConfigError::MissingValue("--messages"))
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let parsed = config(&["--storage-dir="], &[("TEMPLE_OPTIONS_MESSAGES", "  ")])
            .expect("config");
        assert!(parsed.storage_dir.ends_with("temple-wallet/storage"));
        assert_eq!(parsed.messages_path, None);
    }

    #[test]
    fn help_flag_is_detected() {
        assert!(config(&["-h"], &[]).expect("config").show_help);
    }

    #[test]
    fn parse_bool_like_accepts_common_spellings() {
        assert_eq!(parse_bool_like(" ON "), Some(true));
        assert_eq!(parse_bool_like("0"), Some(false));
        assert_eq!(parse_bool_like("maybe"), None);
    }
}
