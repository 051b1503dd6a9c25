use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Result;

/// Resolve the site configuration path:
/// 1. Explicit path
/// 2. HOTEL_CONFIG environment variable
///
/// `None` means "use the built-in defaults".
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    std::env::var_os("HOTEL_CONFIG").map(PathBuf::from)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pages {
    pub home: String,
    pub login: String,
    pub bookings: String,
    pub new_booking: String,
    pub admin: String,
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            home: "index.html".to_string(),
            login: "login.html".to_string(),
            bookings: "mis-reservas.html".to_string(),
            new_booking: "reservas.html".to_string(),
            admin: "admin.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    /// Directory room images are served from
    pub room_images: String,
    /// Fallback image service, seeded per booking
    pub placeholder_base: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            room_images: "assets/img/rooms/".to_string(),
            placeholder_base: "https://picsum.photos".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub timeout_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { timeout_ms: 3000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimals: u8,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub pages: Pages,
    pub assets: Assets,
    pub notifications: NotificationSettings,
    pub currency: CurrencyFormat,
}

impl SiteConfig {
    /// Load from the resolved path, falling back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
