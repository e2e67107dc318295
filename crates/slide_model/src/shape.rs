//! Shape elements and their render descriptors
//!
//! A shape's outline comes from a fixed lookup table expressed in a 200x200
//! view box; the renderer scales it to the element's width and height. Only
//! ellipse, rectangle, triangle, and diamond have their own outline. Every
//! other kind is drawn as a rectangle.
//!
//! When no fill is set, the fill color is picked from a small palette using a
//! hash of the element id, so a shape keeps its color across sessions.

use crate::config::{RenderSettings, FALLBACK_PALETTE};
use crate::{Element, ElementBase, ElementId, ElementType, Result, SlideModelError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coordinate space every outline path is written in.
///
/// Integer unit-square dimensions, unlike the `f64` slide geometry; the
/// renderer scales the box to the descriptor's `width` and `height`.
pub const VIEW_BOX: [u32; 2] = [200, 200];

pub const RECT_PATH: &str = "M 0 0 L 200 0 L 200 200 L 0 200 Z";
pub const ELLIPSE_PATH: &str = "M 100 0 A 50 50 0 1 1 100 200 A 50 50 0 1 1 100 0 Z";
pub const TRIANGLE_PATH: &str = "M 100 0 L 200 200 L 0 200 Z";
pub const DIAMOND_PATH: &str = "M 100 0 L 200 100 L 100 200 L 0 100 Z";

// =============================================================================
// Shape Types
// =============================================================================

/// Geometric category of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    Rect,
    RoundRect,
    Ellipse,
    Triangle,
    Diamond,
    Parallelogram,
    Trapezoid,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Arrow,
    Callout,
    /// Free-form geometry supplied through an explicit path
    Custom,
}

impl ShapeType {
    pub const ALL: [ShapeType; 14] = [
        ShapeType::Rect,
        ShapeType::RoundRect,
        ShapeType::Ellipse,
        ShapeType::Triangle,
        ShapeType::Diamond,
        ShapeType::Parallelogram,
        ShapeType::Trapezoid,
        ShapeType::Pentagon,
        ShapeType::Hexagon,
        ShapeType::Octagon,
        ShapeType::Star,
        ShapeType::Arrow,
        ShapeType::Callout,
        ShapeType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rect => "rect",
            ShapeType::RoundRect => "roundRect",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Triangle => "triangle",
            ShapeType::Diamond => "diamond",
            ShapeType::Parallelogram => "parallelogram",
            ShapeType::Trapezoid => "trapezoid",
            ShapeType::Pentagon => "pentagon",
            ShapeType::Hexagon => "hexagon",
            ShapeType::Octagon => "octagon",
            ShapeType::Star => "star",
            ShapeType::Arrow => "arrow",
            ShapeType::Callout => "callout",
            ShapeType::Custom => "custom",
        }
    }

    /// Outline path in [`VIEW_BOX`] coordinates.
    ///
    /// Kinds without an entry share the rectangle outline.
    pub fn outline_path(&self) -> &'static str {
        match self {
            ShapeType::Ellipse => ELLIPSE_PATH,
            ShapeType::Rect | ShapeType::RoundRect => RECT_PATH,
            ShapeType::Triangle => TRIANGLE_PATH,
            ShapeType::Diamond => DIAMOND_PATH,
            _ => RECT_PATH,
        }
    }

    /// Whether this kind has its own outline rather than the rectangle fallback
    pub fn has_outline(&self) -> bool {
        matches!(
            self,
            ShapeType::Rect
                | ShapeType::RoundRect
                | ShapeType::Ellipse
                | ShapeType::Triangle
                | ShapeType::Diamond
        )
    }
}

impl FromStr for ShapeType {
    type Err = SlideModelError;

    fn from_str(s: &str) -> Result<Self> {
        ShapeType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SlideModelError::UnknownShapeType(s.to_string()))
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Fill and Text
// =============================================================================

/// Solid fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// CSS color string, e.g. "#FF0000" or "rgba(255,0,0,1)"
    pub color: String,
}

impl Fill {
    pub fn new(color: impl Into<String>) -> Self {
        Self { color: color.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Character and paragraph formatting for shape text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valign: Option<VerticalAlign>,
}

/// Text placed inside a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl TextContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }
}

// =============================================================================
// Fallback Fill
// =============================================================================

fn palette_index(id: &ElementId, len: usize) -> usize {
    id.rolling_hash().unsigned_abs() as usize % len
}

/// Color from the built-in palette for an element id
pub fn fallback_color(id: &ElementId) -> &'static str {
    FALLBACK_PALETTE[palette_index(id, FALLBACK_PALETTE.len())]
}

/// Color from a caller-supplied palette, or the built-in one when it is empty
pub fn fallback_color_in<'a>(id: &ElementId, palette: &'a [String]) -> &'a str {
    if palette.is_empty() {
        return fallback_color(id);
    }
    &palette[palette_index(id, palette.len())]
}

// =============================================================================
// Shape Element
// =============================================================================

/// A drawable shape on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    #[serde(flatten)]
    base: ElementBase,
    shape_type: ShapeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill: Option<Fill>,
}

impl ShapeElement {
    pub fn new(id: impl Into<ElementId>, shape_type: ShapeType) -> Self {
        Self {
            base: ElementBase::new(id),
            shape_type,
            path: None,
            text: None,
            fill: None,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Set an explicit path. It does not affect [`ShapeElement::shape_path`].
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Outline for the shape kind; see [`ShapeType::outline_path`]
    pub fn shape_path(&self) -> &'static str {
        self.shape_type.outline_path()
    }

    pub fn set_text(&mut self, text: TextContent) {
        self.text = Some(text);
    }

    pub fn text(&self) -> Option<&TextContent> {
        self.text.as_ref()
    }

    pub fn set_fill(&mut self, fill: Fill) {
        tracing::trace!(
            target: "slide_model::shape",
            id = %self.base.id,
            color = %fill.color,
            "shape fill set"
        );
        self.fill = Some(fill);
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    /// The explicit fill, or a fallback derived from the element id
    pub fn theme_fill(&self) -> Fill {
        match &self.fill {
            Some(fill) => fill.clone(),
            None => Fill::new(fallback_color(&self.base.id)),
        }
    }

    /// Like [`ShapeElement::theme_fill`], picking fallbacks from the configured palette
    pub fn theme_fill_with(&self, settings: &RenderSettings) -> Fill {
        match &self.fill {
            Some(fill) => fill.clone(),
            None => Fill::new(fallback_color_in(&self.base.id, &settings.fallback_palette)),
        }
    }

    pub fn descriptor(&self) -> ShapeDescriptor {
        self.build_descriptor(self.theme_fill())
    }

    pub fn descriptor_with(&self, settings: &RenderSettings) -> ShapeDescriptor {
        self.build_descriptor(self.theme_fill_with(settings))
    }

    /// Serialize to the descriptor consumed by the renderer
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.descriptor())?)
    }

    pub fn to_json_with(&self, settings: &RenderSettings) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.descriptor_with(settings))?)
    }

    fn build_descriptor(&self, theme_fill: Fill) -> ShapeDescriptor {
        if !self.shape_type.has_outline() {
            tracing::debug!(
                target: "slide_model::shape",
                id = %self.base.id,
                shape_type = %self.shape_type,
                "no outline for shape type, drawing rectangle"
            );
        }

        ShapeDescriptor {
            element_type: ElementType::Shape,
            id: self.base.id.clone(),
            left: self.base.left(),
            top: self.base.top(),
            width: self.base.width(),
            height: self.base.height(),
            view_box: VIEW_BOX,
            path: self.shape_path().to_string(),
            theme_fill,
            fixed_ratio: false,
            rotate: self.base.rotate(),
            enable_shrink: true,
        }
    }
}

impl Element for ShapeElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn element_type(&self) -> ElementType {
        ElementType::Shape
    }
}

/// Render-ready description of a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub id: ElementId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub view_box: [u32; 2],
    pub path: String,
    pub theme_fill: Fill,
    pub fixed_ratio: bool,
    pub rotate: f64,
    pub enable_shrink: bool,
}
