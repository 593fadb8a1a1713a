use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    catalog::DeviceCatalog,
    errors::OrderError,
    form::{EmailPolicy, ValidationPolicy, Validator, CURRENCY_GLYPH},
    render::{SummaryMode, SummaryRenderer, DELIVERY_FEE},
    utils::paths,
};

const TMP_SUFFIX: &str = "tmp";

/// The two shipped generations of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// CHECK/CONFIRM buttons, email optional, capitalized name.
    #[default]
    Classic,
    /// ENG/VN buttons, email required, digits-only phone numbers.
    Bilingual,
}

impl FormVariant {
    pub fn mode_label(self, mode: SummaryMode) -> &'static str {
        match (self, mode) {
            (FormVariant::Classic, SummaryMode::Check) => "CHECK",
            (FormVariant::Classic, SummaryMode::Confirm) => "CONFIRM",
            (FormVariant::Bilingual, SummaryMode::Check) => "ENG",
            (FormVariant::Bilingual, SummaryMode::Confirm) => "VN",
        }
    }

    fn preset(self) -> (ValidationPolicy, bool) {
        match self {
            FormVariant::Classic => (
                ValidationPolicy {
                    email_policy: EmailPolicy::WhenPresent,
                    strict_phone_check: false,
                },
                true,
            ),
            FormVariant::Bilingual => (
                ValidationPolicy {
                    email_policy: EmailPolicy::Required,
                    strict_phone_check: true,
                },
                false,
            ),
        }
    }
}

/// User settings for the order desk. Unset overrides fall back to the
/// variant preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub variant: FormVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_policy: Option<EmailPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_phone_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalize_name: Option<bool>,
    #[serde(default = "Config::default_delivery_fee")]
    pub delivery_fee: f64,
    /// Replaces the built-in device list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<String>>,
    #[serde(default = "Config::default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: FormVariant::default(),
            email_policy: None,
            strict_phone_check: None,
            capitalize_name: None,
            delivery_fee: Self::default_delivery_fee(),
            devices: None,
            color: Self::default_color(),
        }
    }
}

impl Config {
    pub fn default_delivery_fee() -> f64 {
        DELIVERY_FEE
    }

    pub fn default_color() -> bool {
        true
    }

    pub fn policy(&self) -> ValidationPolicy {
        let (preset, _) = self.variant.preset();
        ValidationPolicy {
            email_policy: self.email_policy.unwrap_or(preset.email_policy),
            strict_phone_check: self.strict_phone_check.unwrap_or(preset.strict_phone_check),
        }
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.policy())
    }

    pub fn renderer(&self) -> SummaryRenderer {
        let (_, capitalize) = self.variant.preset();
        SummaryRenderer::new(self.delivery_fee, self.capitalize_name.unwrap_or(capitalize))
    }

    /// Keys accepted by [`Config::set_value`].
    pub const SETTABLE_KEYS: [&'static str; 6] = [
        "variant",
        "email_policy",
        "strict_phone_check",
        "capitalize_name",
        "delivery_fee",
        "color",
    ];

    /// Updates one setting from its text form. `default` clears a variant
    /// override.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), OrderError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "variant" => {
                self.variant = match value.to_ascii_lowercase().as_str() {
                    "classic" => FormVariant::Classic,
                    "bilingual" => FormVariant::Bilingual,
                    _ => return Err(invalid("variant", value, "classic|bilingual")),
                }
            }
            "email_policy" => {
                self.email_policy = match value.to_ascii_lowercase().as_str() {
                    "default" => None,
                    "when_present" => Some(EmailPolicy::WhenPresent),
                    "required" => Some(EmailPolicy::Required),
                    _ => {
                        return Err(invalid(
                            "email_policy",
                            value,
                            "when_present|required|default",
                        ))
                    }
                }
            }
            "strict_phone_check" => {
                self.strict_phone_check = parse_override("strict_phone_check", value)?
            }
            "capitalize_name" => self.capitalize_name = parse_override("capitalize_name", value)?,
            "delivery_fee" => {
                self.delivery_fee = value
                    .trim_start_matches(CURRENCY_GLYPH)
                    .parse::<f64>()
                    .ok()
                    .filter(|fee| fee.is_finite() && *fee >= 0.0)
                    .ok_or_else(|| invalid("delivery_fee", value, "a non-negative amount"))?
            }
            "color" => {
                self.color = parse_override("color", value)?
                    .ok_or_else(|| invalid("color", value, "true|false"))?
            }
            other => {
                return Err(OrderError::InvalidSetting(format!(
                    "unknown key `{}` (expected one of: {})",
                    other,
                    Self::SETTABLE_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> DeviceCatalog {
        match &self.devices {
            Some(devices) => DeviceCatalog::new(devices.iter().cloned()),
            None => DeviceCatalog::default(),
        }
    }
}

/// Reads and writes `config.json` in the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(paths::config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Config, OrderError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), OrderError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(key: &str, value: &str, expected: &str) -> OrderError {
    OrderError::InvalidSetting(format!("`{}` is not valid for {} ({})", value, key, expected))
}

fn parse_override(key: &str, value: &str) -> Result<Option<bool>, OrderError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(Some(true)),
        "false" | "no" | "off" => Ok(Some(false)),
        "default" => Ok(None),
        _ => Err(invalid(key, value, "true|false|default")),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), OrderError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn classic_preset_matches_original_form() {
        let config = Config::default();
        assert_eq!(config.policy(), ValidationPolicy::default());
        assert!(config.renderer().capitalize_name);
        assert_eq!(config.renderer().delivery_fee, 1500.0);
        assert_eq!(config.catalog(), DeviceCatalog::default());
    }

    #[test]
    fn bilingual_preset_is_strict() {
        let config = Config {
            variant: FormVariant::Bilingual,
            ..Config::default()
        };
        let policy = config.policy();
        assert_eq!(policy.email_policy, EmailPolicy::Required);
        assert!(policy.strict_phone_check);
        assert!(!config.renderer().capitalize_name);
        assert_eq!(config.variant.mode_label(SummaryMode::Confirm), "VN");
    }

    #[test]
    fn overrides_win_over_preset() {
        let config = Config {
            variant: FormVariant::Bilingual,
            email_policy: Some(EmailPolicy::WhenPresent),
            capitalize_name: Some(true),
            ..Config::default()
        };
        assert_eq!(config.policy().email_policy, EmailPolicy::WhenPresent);
        assert!(config.policy().strict_phone_check);
        assert!(config.renderer().capitalize_name);
    }

    #[test]
    fn set_value_updates_and_clears_overrides() {
        let mut config = Config::default();
        config.set_value("variant", "Bilingual").unwrap();
        config.set_value("email-policy", "when_present").unwrap();
        config.set_value("delivery_fee", "¥990").unwrap();
        config.set_value("color", "off").unwrap();

        assert_eq!(config.variant, FormVariant::Bilingual);
        assert_eq!(config.policy().email_policy, EmailPolicy::WhenPresent);
        assert_eq!(config.renderer().delivery_fee, 990.0);
        assert!(!config.color);

        config.set_value("email_policy", "default").unwrap();
        assert_eq!(config.email_policy, None);
        assert_eq!(config.policy().email_policy, EmailPolicy::Required);
    }

    #[test]
    fn set_value_rejects_bad_input() {
        let mut config = Config::default();
        for (key, value) in [
            ("variant", "modern"),
            ("delivery_fee", "-5"),
            ("color", "default"),
            ("capitalize_name", "maybe"),
            ("currency", "USD"),
        ] {
            let err = config.set_value(key, value).unwrap_err();
            assert!(matches!(err, OrderError::InvalidSetting(_)), "{key}={value}");
        }
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.json"));
        assert_eq!(manager.load().unwrap(), Config::default());
        assert!(!manager.path().exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));
        let config = Config {
            variant: FormVariant::Bilingual,
            delivery_fee: 990.0,
            devices: Some(vec!["Router A".into(), "Router B".into()]),
            ..Config::default()
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.catalog().len(), 2);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "variant": "bilingual" }"#).unwrap();
        let loaded = ConfigManager::with_path(path).load().unwrap();
        assert_eq!(loaded.variant, FormVariant::Bilingual);
        assert_eq!(loaded.delivery_fee, DELIVERY_FEE);
        assert!(loaded.color);
    }
}
