use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use ratatui::style::Color;
use tracing::debug;

use crate::availability::{AvailabilityStatus, Tone};
use crate::error::{Result, RosterError};
use crate::formatting::BoxChars;
use crate::taxonomy::{default_position_groups, GroupTaxonomy, PositionGroup, DEFAULT_UNMAPPED_LABEL};
use crate::view::{ViewMode, ViewSettings, DEFAULT_PAGE_SIZE};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Seconds between "updated N minutes ago" refreshes
    pub refresh_interval: u32,
    /// JSON dataset; the bundled roster is used when unset
    pub data_file: Option<PathBuf>,
    /// JSON injury datasets; the bundled ones are used when unset
    pub injury_file: Option<PathBuf>,
    pub default_view: ViewMode,
    pub page_size: usize,
    pub use_unicode: bool,
    pub unmapped_label: String,
    pub position_groups: Vec<PositionGroup>,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub header_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub available_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub injured_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub doubtful_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub unavailable_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 300,
            data_file: None,
            injury_file: None,
            default_view: ViewMode::Grid,
            page_size: DEFAULT_PAGE_SIZE,
            use_unicode: true,
            unmapped_label: DEFAULT_UNMAPPED_LABEL.to_string(),
            position_groups: default_position_groups(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            header_fg: Color::Rgb(159, 226, 191), // Seafoam
            available_fg: Color::Green,
            injured_fg: Color::Red,
            doubtful_fg: Color::Yellow,
            unavailable_fg: Color::LightRed,
        }
    }
}

impl Config {
    /// Build and validate the position-group taxonomy
    pub fn taxonomy(&self) -> Result<GroupTaxonomy> {
        GroupTaxonomy::new(self.position_groups.clone(), &self.unmapped_label)
    }

    /// Check the settings that can only be wrong in combination
    pub fn validate(&self) -> Result<()> {
        self.taxonomy()?;
        if self.page_size == 0 {
            return Err(RosterError::InvalidPageSize);
        }
        Ok(())
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            view_mode: self.default_view,
            page_size: self.page_size,
        }
    }

    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            selection_fg: self.theme.selection_fg,
            header_fg: self.theme.header_fg,
            available_fg: self.theme.available_fg,
            injured_fg: self.theme.injured_fg,
            doubtful_fg: self.theme.doubtful_fg,
            unavailable_fg: self.theme.unavailable_fg,
            error_fg: Color::Red,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

/// Resolved render settings: theme colors and box-drawing characters
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub selection_fg: Color,
    pub header_fg: Color,
    pub available_fg: Color,
    pub injured_fg: Color,
    pub doubtful_fg: Color,
    pub unavailable_fg: Color,
    pub error_fg: Color,
    pub box_chars: BoxChars,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl DisplayConfig {
    /// Foreground color for an availability tone
    ///
    /// Unavailable and Injured share the Error tone but keep separate theme
    /// colors, so callers with a concrete status should prefer `status_fg`.
    pub fn tone_fg(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.available_fg,
            Tone::Warning => self.doubtful_fg,
            Tone::Error => self.injured_fg,
            Tone::Neutral => Color::Gray,
        }
    }

    pub fn status_fg(&self, status: AvailabilityStatus) -> Color {
        match status {
            AvailabilityStatus::Unavailable => self.unavailable_fg,
            other => self.tone_fg(other.tone()),
        }
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    let named = match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "orange" => Some(Color::Rgb(255, 165, 0)),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let parts: Vec<&str> = s.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        return Some(Color::Rgb(
            r.trim().parse().ok()?,
            g.trim().parse().ok()?,
            b.trim().parse().ok()?,
        ));
    }

    None
}

/// `rrggbb` or `rgb` without the leading '#'
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => Some(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        _ => None,
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, using defaults when there is none
///
/// A file that exists but cannot be read, parsed or validated is an error;
/// it never silently falls back to the defaults.
pub fn read() -> Result<Config> {
    match get_config_path() {
        Some(path) => read_from(&path),
        None => {
            debug!("No config directory; using defaults");
            Ok(Config::default())
        }
    }
}

/// Read and validate the config at `path`; a missing file yields the defaults
pub fn read_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| RosterError::ConfigIo {
        path: path.display().to_string(),
        source,
    })?;
    let config: Config = toml::from_str(&content).map_err(|source| RosterError::ConfigFormat {
        path: path.display().to_string(),
        source,
    })?;
    config.validate()?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Write `content` to a fresh config file under the temp directory
    fn config_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("roster-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("Grey"), Some(Color::Gray));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("1,2"), None);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.refresh_interval, 300);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.default_view, ViewMode::Grid);
        assert!(config.data_file.is_none());
        assert!(config.injury_file.is_none());
        assert_eq!(config.taxonomy().unwrap(), GroupTaxonomy::default());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
log_level = "debug"
data_file = "/srv/roster/athletes.json"
injury_file = "/srv/roster/injuries.json"
default_view = "ladder"
page_size = 3
unmapped_label = "Unassigned"

[[position_groups]]
label = "Back"
positions = ["Goalkeeper", "Defender"]

[[position_groups]]
label = "Front"
positions = ["Forward"]

[theme]
selection_fg = "cyan"
injured_fg = "#ff0000"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        // Unset keys keep their defaults
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/roster/athletes.json")));
        assert_eq!(config.injury_file, Some(PathBuf::from("/srv/roster/injuries.json")));
        assert_eq!(config.view_settings(), ViewSettings { view_mode: ViewMode::Ladder, page_size: 3 });

        let taxonomy = config.taxonomy().unwrap();
        assert_eq!(taxonomy.labels().collect::<Vec<_>>(), vec!["Back", "Front"]);
        assert_eq!(taxonomy.unmapped_label(), "Unassigned");

        assert_eq!(config.theme.selection_fg, Color::Cyan);
        assert_eq!(config.theme.injured_fg, Color::Rgb(255, 0, 0));
        assert_eq!(config.theme.available_fg, Color::Green);
    }

    #[test]
    fn test_invalid_taxonomy_surfaces_error() {
        let toml_str = r#"
[[position_groups]]
label = "Attack"
positions = []
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(matches!(config.taxonomy(), Err(RosterError::EmptyGroup(_))));
    }

    #[test]
    fn test_read_from_missing_file_uses_defaults() {
        let config = read_from(Path::new("/nonexistent/roster/config.toml")).unwrap();
        assert_eq!(config.taxonomy().unwrap(), GroupTaxonomy::default());
    }

    #[test]
    fn test_read_from_custom_taxonomy() {
        let path = config_file(
            "custom",
            "[[position_groups]]\nlabel = \"Attack\"\npositions = [\"Forward\"]\n",
        );
        let config = read_from(&path).unwrap();
        assert_eq!(config.taxonomy().unwrap().labels().collect::<Vec<_>>(), vec!["Attack"]);
    }

    #[test]
    fn test_read_from_malformed_position_groups_is_reported() {
        // positions must be an array
        let path = config_file(
            "malformed",
            "[[position_groups]]\nlabel = \"Attack\"\npositions = \"Forward\"\n",
        );
        let err = read_from(&path).unwrap_err();
        assert!(matches!(err, RosterError::ConfigFormat { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_read_from_invalid_taxonomy_is_reported() {
        let path = config_file(
            "ambiguous",
            "[[position_groups]]\nlabel = \"Midfield\"\npositions = [\"Winger\"]\n\n\
             [[position_groups]]\nlabel = \"Attack\"\npositions = [\"Winger\"]\n",
        );
        assert!(matches!(
            read_from(&path).unwrap_err(),
            RosterError::AmbiguousPosition { .. }
        ));
    }

    #[test]
    fn test_zero_page_size_fails_validation() {
        let config = Config { page_size: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(RosterError::InvalidPageSize)));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let toml_str = r#"
[theme]
header_fg = "not-a-color"
        "#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_display_config_status_colors() {
        let display = Config::default().display();
        assert_eq!(display.status_fg(AvailabilityStatus::Available), Color::Green);
        assert_eq!(display.status_fg(AvailabilityStatus::Injured), Color::Red);
        assert_eq!(display.status_fg(AvailabilityStatus::Doubtful), Color::Yellow);
        assert_eq!(display.status_fg(AvailabilityStatus::Unavailable), Color::LightRed);
        assert_eq!(display.status_fg(AvailabilityStatus::Unknown), Color::Gray);
    }

    #[test]
    fn test_display_config_ascii() {
        let config = Config { use_unicode: false, ..Config::default() };
        assert_eq!(config.display().box_chars, BoxChars::ascii());
    }
}
