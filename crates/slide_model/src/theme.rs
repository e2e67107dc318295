//! Presentation themes - color, font, and format schemes shared by a deck
//!
//! A theme is a plain snapshot of state. Every scheme is optional, and
//! serialization reports exactly what is set: absent schemes are omitted
//! from the JSON rather than filled with defaults.
//!
//! Colors are addressed two ways:
//! - typed, through [`ColorSlot`], closed to the twelve scheme slots
//! - keyed, through [`Theme::set_theme_color`], which accepts any string and
//!   stores names that are not slots in a separate extended table

use crate::{Result, SlideModelError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

// =============================================================================
// Color Slots
// =============================================================================

/// One of the twelve named colors of a theme color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorSlot {
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    /// Light 1 (usually the background)
    Lt1,
    /// Light 2
    Lt2,
    /// Dark 1 (usually body text)
    Dk1,
    /// Dark 2
    Dk2,
    Hyperlink,
    FollowedHyperlink,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 12] = [
        ColorSlot::Accent1,
        ColorSlot::Accent2,
        ColorSlot::Accent3,
        ColorSlot::Accent4,
        ColorSlot::Accent5,
        ColorSlot::Accent6,
        ColorSlot::Lt1,
        ColorSlot::Lt2,
        ColorSlot::Dk1,
        ColorSlot::Dk2,
        ColorSlot::Hyperlink,
        ColorSlot::FollowedHyperlink,
    ];

    /// Key used for this slot in the serialized color scheme
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSlot::Accent1 => "accent1",
            ColorSlot::Accent2 => "accent2",
            ColorSlot::Accent3 => "accent3",
            ColorSlot::Accent4 => "accent4",
            ColorSlot::Accent5 => "accent5",
            ColorSlot::Accent6 => "accent6",
            ColorSlot::Lt1 => "lt1",
            ColorSlot::Lt2 => "lt2",
            ColorSlot::Dk1 => "dk1",
            ColorSlot::Dk2 => "dk2",
            ColorSlot::Hyperlink => "hyperlink",
            ColorSlot::FollowedHyperlink => "followedHyperlink",
        }
    }
}

impl FromStr for ColorSlot {
    type Err = SlideModelError;

    fn from_str(s: &str) -> Result<Self> {
        ColorSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| SlideModelError::UnknownColorSlot(s.to_string()))
    }
}

impl std::fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a keyed theme color lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColorKey {
    /// The key names one of the twelve scheme slots
    Slot(ColorSlot),
    /// Any other key; kept in the extended table
    Extended(String),
}

impl ThemeColorKey {
    pub fn parse(key: &str) -> Self {
        match key.parse::<ColorSlot>() {
            Ok(slot) => ThemeColorKey::Slot(slot),
            Err(_) => ThemeColorKey::Extended(key.to_string()),
        }
    }

    pub fn is_slot(&self) -> bool {
        matches!(self, ThemeColorKey::Slot(_))
    }
}

// =============================================================================
// Color Scheme
// =============================================================================

/// Theme color table.
///
/// Slots may be left unset. Extended keys serialize next to the slots so the
/// wire form stays a single flat object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dk1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dk2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followed_hyperlink: Option<String>,
    /// Colors stored under keys that are not scheme slots
    #[serde(flatten)]
    extended: BTreeMap<String, String>,
}

impl ColorScheme {
    /// Build a fully populated scheme, slot values given in [`ColorSlot::ALL`] order
    pub fn from_slots(colors: [&str; 12]) -> Self {
        let mut scheme = Self::default();
        for (slot, color) in ColorSlot::ALL.into_iter().zip(colors) {
            scheme.set(slot, color);
        }
        scheme
    }

    pub fn get(&self, slot: ColorSlot) -> Option<&str> {
        self.slot_ref(slot).as_deref()
    }

    pub fn set(&mut self, slot: ColorSlot, color: impl Into<String>) {
        *self.slot_mut(slot) = Some(color.into());
    }

    pub fn get_extended(&self, key: &str) -> Option<&str> {
        self.extended.get(key).map(String::as_str)
    }

    /// Store a color under an arbitrary key.
    ///
    /// Slot names are written to their slot so the extended table never
    /// shadows a slot in the serialized scheme.
    pub fn set_extended(&mut self, key: impl Into<String>, color: impl Into<String>) -> ThemeColorKey {
        let key = key.into();
        match key.parse::<ColorSlot>() {
            Ok(slot) => {
                self.set(slot, color);
                ThemeColorKey::Slot(slot)
            }
            Err(_) => {
                self.extended.insert(key.clone(), color.into());
                ThemeColorKey::Extended(key)
            }
        }
    }

    /// Colors stored under keys that are not scheme slots
    pub fn extended(&self) -> &BTreeMap<String, String> {
        &self.extended
    }

    /// Number of slots holding a color
    pub fn populated_slots(&self) -> usize {
        ColorSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_some())
            .count()
    }

    fn slot_ref(&self, slot: ColorSlot) -> &Option<String> {
        match slot {
            ColorSlot::Accent1 => &self.accent1,
            ColorSlot::Accent2 => &self.accent2,
            ColorSlot::Accent3 => &self.accent3,
            ColorSlot::Accent4 => &self.accent4,
            ColorSlot::Accent5 => &self.accent5,
            ColorSlot::Accent6 => &self.accent6,
            ColorSlot::Lt1 => &self.lt1,
            ColorSlot::Lt2 => &self.lt2,
            ColorSlot::Dk1 => &self.dk1,
            ColorSlot::Dk2 => &self.dk2,
            ColorSlot::Hyperlink => &self.hyperlink,
            ColorSlot::FollowedHyperlink => &self.followed_hyperlink,
        }
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<String> {
        match slot {
            ColorSlot::Accent1 => &mut self.accent1,
            ColorSlot::Accent2 => &mut self.accent2,
            ColorSlot::Accent3 => &mut self.accent3,
            ColorSlot::Accent4 => &mut self.accent4,
            ColorSlot::Accent5 => &mut self.accent5,
            ColorSlot::Accent6 => &mut self.accent6,
            ColorSlot::Lt1 => &mut self.lt1,
            ColorSlot::Lt2 => &mut self.lt2,
            ColorSlot::Dk1 => &mut self.dk1,
            ColorSlot::Dk2 => &mut self.dk2,
            ColorSlot::Hyperlink => &mut self.hyperlink,
            ColorSlot::FollowedHyperlink => &mut self.followed_hyperlink,
        }
    }
}

// =============================================================================
// Font Scheme
// =============================================================================

/// Typefaces for one role (headings or body), per script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCollection {
    /// Latin typeface
    pub latin: String,
    /// East Asian typeface
    pub ea: String,
    /// Complex script typeface
    pub cs: String,
}

impl FontCollection {
    pub fn latin(latin: impl Into<String>) -> Self {
        Self {
            latin: latin.into(),
            ..Default::default()
        }
    }
}

/// Heading (major) and body (minor) fonts of a theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontScheme {
    pub major_font: FontCollection,
    pub minor_font: FontCollection,
}

// =============================================================================
// Format Scheme
// =============================================================================

/// Style lists of a theme. Records are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatScheme {
    pub fill_styles: Vec<serde_json::Value>,
    pub line_styles: Vec<serde_json::Value>,
    pub effect_styles: Vec<serde_json::Value>,
    pub background_fill_styles: Vec<serde_json::Value>,
}

// =============================================================================
// Theme
// =============================================================================

/// A named bundle of color, font, and format schemes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    font_scheme: Option<FontScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format_scheme: Option<FormatScheme>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the whole color table. Missing slots are accepted.
    pub fn set_color_scheme(&mut self, color_scheme: ColorScheme) {
        tracing::trace!(
            target: "slide_model::theme",
            theme = %self.name,
            populated_slots = color_scheme.populated_slots(),
            "color scheme replaced"
        );
        self.color_scheme = Some(color_scheme);
    }

    pub fn color_scheme(&self) -> Option<&ColorScheme> {
        self.color_scheme.as_ref()
    }

    pub fn set_font_scheme(&mut self, font_scheme: FontScheme) {
        tracing::trace!(target: "slide_model::theme", theme = %self.name, "font scheme replaced");
        self.font_scheme = Some(font_scheme);
    }

    pub fn font_scheme(&self) -> Option<&FontScheme> {
        self.font_scheme.as_ref()
    }

    pub fn set_format_scheme(&mut self, format_scheme: FormatScheme) {
        tracing::trace!(target: "slide_model::theme", theme = %self.name, "format scheme replaced");
        self.format_scheme = Some(format_scheme);
    }

    pub fn format_scheme(&self) -> Option<&FormatScheme> {
        self.format_scheme.as_ref()
    }

    /// Color stored in a scheme slot, if the scheme exists and the slot is set
    pub fn color(&self, slot: ColorSlot) -> Option<&str> {
        self.color_scheme.as_ref()?.get(slot)
    }

    /// Set one slot, creating an empty color scheme first if needed
    pub fn set_color(&mut self, slot: ColorSlot, color: impl Into<String>) {
        self.color_scheme.get_or_insert_with(ColorScheme::default).set(slot, color);
    }

    /// Set a color by arbitrary key.
    ///
    /// Slot names land in their slot; anything else goes to the extended
    /// table. Keys are never rejected. The returned key tells callers which
    /// table was written.
    pub fn set_theme_color(&mut self, key: &str, color: impl Into<String>) -> ThemeColorKey {
        let scheme = self.color_scheme.get_or_insert_with(ColorScheme::default);
        let resolved = scheme.set_extended(key, color);
        if let ThemeColorKey::Extended(name) = &resolved {
            tracing::debug!(
                target: "slide_model::theme",
                theme = %self.name,
                key = %name,
                "theme color key is not a scheme slot, storing as extended color"
            );
        }
        resolved
    }

    /// Look up a color by arbitrary key, checking slots then extended keys
    pub fn theme_color(&self, key: &str) -> Option<&str> {
        let scheme = self.color_scheme.as_ref()?;
        match ThemeColorKey::parse(key) {
            ThemeColorKey::Slot(slot) => scheme.get(slot),
            ThemeColorKey::Extended(name) => scheme.get_extended(&name),
        }
    }

    /// Set the latin typeface of both major and minor fonts.
    ///
    /// Creates a font scheme with empty east asian and complex script faces
    /// when none exists.
    pub fn set_font_name(&mut self, font_name: impl Into<String>) {
        let font_name = font_name.into();
        let scheme = self.font_scheme.get_or_insert_with(FontScheme::default);
        scheme.major_font.latin = font_name.clone();
        scheme.minor_font.latin = font_name;
    }

    /// Latin typeface of the major font, or an empty string
    pub fn font_name(&self) -> &str {
        self.font_scheme
            .as_ref()
            .map_or("", |scheme| scheme.major_font.latin.as_str())
    }

    /// Serialize to the snapshot consumed by the renderer
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a theme from a snapshot produced by [`Theme::to_json`]
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn office_colors() -> ColorScheme {
        ColorScheme::from_slots([
            "#4472C4", "#ED7D31", "#A5A5A5", "#FFC000", "#5B9BD5", "#70AD47", "#FFFFFF",
            "#E7E6E6", "#000000", "#44546A", "#0563C1", "#954F72",
        ])
    }

    // =========================================================================
    // Color Slot Tests
    // =========================================================================

    #[test]
    fn test_color_slot_names() {
        assert_eq!(ColorSlot::Accent1.as_str(), "accent1");
        assert_eq!(ColorSlot::FollowedHyperlink.as_str(), "followedHyperlink");
        for slot in ColorSlot::ALL {
            assert_eq!(slot.as_str().parse::<ColorSlot>().unwrap(), slot);
            assert_eq!(serde_json::to_value(slot).unwrap(), json!(slot.as_str()));
        }
    }

    #[test]
    fn test_color_slot_rejects_unknown_name() {
        let err = "brand".parse::<ColorSlot>().unwrap_err();
        assert!(matches!(err, SlideModelError::UnknownColorSlot(ref name) if name == "brand"));
        assert!("Accent1".parse::<ColorSlot>().is_err());
    }

    #[test]
    fn test_theme_color_key_parse() {
        assert_eq!(ThemeColorKey::parse("dk2"), ThemeColorKey::Slot(ColorSlot::Dk2));
        assert_eq!(
            ThemeColorKey::parse("brandPrimary"),
            ThemeColorKey::Extended("brandPrimary".to_string())
        );
    }

    // =========================================================================
    // Theme Tests
    // =========================================================================

    #[test]
    fn test_theme_name() {
        assert_eq!(Theme::new("Office").name(), "Office");
        assert_eq!(Theme::default().name(), "");
    }

    #[test]
    fn test_color_without_scheme() {
        let theme = Theme::new("Empty");
        for slot in ColorSlot::ALL {
            assert_eq!(theme.color(slot), None);
        }
        assert_eq!(theme.theme_color("accent1"), None);
    }

    #[test]
    fn test_color_with_full_scheme() {
        let mut theme = Theme::new("Office");
        theme.set_color_scheme(office_colors());
        assert_eq!(theme.color(ColorSlot::Accent1), Some("#4472C4"));
        assert_eq!(theme.color(ColorSlot::FollowedHyperlink), Some("#954F72"));
        assert_eq!(theme.color_scheme().unwrap().populated_slots(), 12);
    }

    #[test]
    fn test_sparse_color_scheme() {
        let mut scheme = ColorScheme::default();
        scheme.set(ColorSlot::Accent2, "#ED7D31");
        let mut theme = Theme::new("Sparse");
        theme.set_color_scheme(scheme);

        assert_eq!(theme.color(ColorSlot::Accent2), Some("#ED7D31"));
        assert_eq!(theme.color(ColorSlot::Accent1), None);
    }

    #[test]
    fn test_set_theme_color_slot() {
        let mut theme = Theme::new("Office");
        let key = theme.set_theme_color("accent1", "#FF0000");

        assert_eq!(key, ThemeColorKey::Slot(ColorSlot::Accent1));
        assert_eq!(theme.theme_color("accent1"), Some("#FF0000"));
        assert_eq!(theme.color(ColorSlot::Accent1), Some("#FF0000"));
    }

    #[test]
    fn test_set_theme_color_extended() {
        let mut theme = Theme::new("Brand");
        let key = theme.set_theme_color("brandPrimary", "#123456");

        assert!(!key.is_slot());
        assert_eq!(theme.theme_color("brandPrimary"), Some("#123456"));
        assert_eq!(theme.theme_color("brandSecondary"), None);
        let scheme = theme.color_scheme().unwrap();
        assert_eq!(scheme.populated_slots(), 0);
        assert_eq!(scheme.get_extended("brandPrimary"), Some("#123456"));
    }

    #[test]
    fn test_set_extended_routes_slot_names() {
        let mut theme = Theme::new("Office");
        theme.set_theme_color("accent1", "#111111");

        let mut scheme = theme.color_scheme().cloned().unwrap();
        let key = scheme.set_extended("accent1", "#999999");
        assert_eq!(key, ThemeColorKey::Slot(ColorSlot::Accent1));
        assert!(scheme.extended().is_empty());
        theme.set_color_scheme(scheme);

        assert_eq!(theme.color(ColorSlot::Accent1), Some("#999999"));
        assert_eq!(theme.theme_color("accent1"), Some("#999999"));

        let snapshot = theme.to_json().unwrap();
        assert_eq!(snapshot["colorScheme"]["accent1"], json!("#999999"));
        assert_eq!(Theme::from_json(snapshot).unwrap(), theme);
    }

    #[test]
    fn test_set_color_creates_scheme() {
        let mut theme = Theme::new("Office");
        assert!(theme.color_scheme().is_none());
        theme.set_color(ColorSlot::Dk1, "#000000");
        assert_eq!(theme.theme_color("dk1"), Some("#000000"));
    }

    #[test]
    fn test_set_font_name_creates_scheme() {
        let mut theme = Theme::new("Office");
        assert_eq!(theme.font_name(), "");

        theme.set_font_name("Calibri");
        assert_eq!(theme.font_name(), "Calibri");

        let fonts = theme.font_scheme().unwrap();
        assert_eq!(fonts.major_font, FontCollection::latin("Calibri"));
        assert_eq!(fonts.minor_font, FontCollection::latin("Calibri"));
    }

    #[test]
    fn test_set_font_name_keeps_other_scripts() {
        let mut theme = Theme::new("Office");
        theme.set_font_scheme(FontScheme {
            major_font: FontCollection {
                latin: "Calibri Light".into(),
                ea: "MS Gothic".into(),
                cs: "Arial".into(),
            },
            minor_font: FontCollection {
                latin: "Calibri".into(),
                ea: "MS Mincho".into(),
                cs: "Times New Roman".into(),
            },
        });

        theme.set_font_name("Aptos");
        let fonts = theme.font_scheme().unwrap();
        assert_eq!(fonts.major_font.latin, "Aptos");
        assert_eq!(fonts.minor_font.latin, "Aptos");
        assert_eq!(fonts.major_font.ea, "MS Gothic");
        assert_eq!(fonts.minor_font.cs, "Times New Roman");
    }

    // =========================================================================
    // Serialization Tests
    // =========================================================================

    #[test]
    fn test_to_json_omits_unset_schemes() {
        let theme = Theme::new("Office");
        assert_eq!(theme.to_json().unwrap(), json!({ "name": "Office" }));
    }

    #[test]
    fn test_to_json_full() {
        let mut theme = Theme::new("Office");
        theme.set_theme_color("accent1", "#FF0000");
        theme.set_theme_color("brandPrimary", "#123456");
        theme.set_font_name("Calibri");
        theme.set_format_scheme(FormatScheme {
            fill_styles: vec![json!({ "type": "solid" })],
            ..Default::default()
        });

        assert_eq!(
            theme.to_json().unwrap(),
            json!({
                "name": "Office",
                "colorScheme": { "accent1": "#FF0000", "brandPrimary": "#123456" },
                "fontScheme": {
                    "majorFont": { "latin": "Calibri", "ea": "", "cs": "" },
                    "minorFont": { "latin": "Calibri", "ea": "", "cs": "" }
                },
                "formatScheme": {
                    "fillStyles": [{ "type": "solid" }],
                    "lineStyles": [],
                    "effectStyles": [],
                    "backgroundFillStyles": []
                }
            })
        );
    }

    #[test]
    fn test_from_json_routes_unknown_keys_to_extended() {
        let theme = Theme::from_json(json!({
            "name": "Imported",
            "colorScheme": { "dk1": "#000000", "followedHyperlink": "#954F72", "brand": "#ABCDEF" }
        }))
        .unwrap();

        assert_eq!(theme.color(ColorSlot::Dk1), Some("#000000"));
        assert_eq!(theme.color(ColorSlot::FollowedHyperlink), Some("#954F72"));
        assert_eq!(theme.theme_color("brand"), Some("#ABCDEF"));
        assert!(theme.font_scheme().is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed_snapshot() {
        let err = Theme::from_json(json!({ "name": 42 })).unwrap_err();
        assert!(matches!(err, SlideModelError::Json(_)));
    }
}
