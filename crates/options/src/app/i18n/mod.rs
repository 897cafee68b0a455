use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    TempleWalletOptions,
    ResetExtension,
    ActionConfirmation,
    Error,
    ResetExtensionConfirmation,
    Ok,
    Cancel,
}

impl MessageKey {
    pub const ALL: [MessageKey; 7] = [
        MessageKey::TempleWalletOptions,
        MessageKey::ResetExtension,
        MessageKey::ActionConfirmation,
        MessageKey::Error,
        MessageKey::ResetExtensionConfirmation,
        MessageKey::Ok,
        MessageKey::Cancel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::TempleWalletOptions => "templeWalletOptions",
            MessageKey::ResetExtension => "resetExtension",
            MessageKey::ActionConfirmation => "actionConfirmation",
            MessageKey::Error => "error",
            MessageKey::ResetExtensionConfirmation => "resetExtensionConfirmation",
            MessageKey::Ok => "ok",
            MessageKey::Cancel => "cancel",
        }
    }

    fn english(self) -> &'static str {
        match self {
            MessageKey::TempleWalletOptions => "Temple Wallet Options",
            MessageKey::ResetExtension => "Reset Extension",
            MessageKey::ActionConfirmation => "Action confirmation",
            MessageKey::Error => "Error",
            MessageKey::ResetExtensionConfirmation => {
                "Are you sure you want to reset the extension? All wallet data stored by the \
                 extension will be erased. Make sure your seed phrase is backed up."
            }
            MessageKey::Ok => "OK",
            MessageKey::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessagesError {
    #[error("failed to read message catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct MessageEntry {
    message: String,
}

/// Localized strings for the options page.
///
/// Catalogs use the extension `messages.json` layout. Keys the catalog does
/// not translate resolve to the built-in English text, so lookups are total.
#[derive(Debug, Default, Clone)]
pub struct Messages {
    translated: HashMap<String, String>,
}

impl Messages {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> Result<Self, MessagesError> {
        let entries: HashMap<String, MessageEntry> = serde_json::from_str(raw)?;
        let translated = entries
            .into_iter()
            .filter(|(_, entry)| !entry.message.trim().is_empty())
            .map(|(key, entry)| (key, entry.message))
            .collect();
        Ok(Self { translated })
    }

    pub fn load(path: &Path) -> Result<Self, MessagesError> {
        let raw = std::fs::read_to_string(path).map_err(|source| MessagesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn get(&self, key: MessageKey) -> &str {
        self.translated
            .get(key.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| key.english())
    }

    pub fn translated_count(&self) -> usize {
        MessageKey::ALL
            .iter()
            .filter(|key| self.translated.contains_key(key.as_str()))
            .count()
    }
}
