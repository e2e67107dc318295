//! Shape-agnostic element record shared by every slide element kind

use crate::ElementId;
use serde::{Deserialize, Serialize};

/// Enumeration of all element kinds that can appear on a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Image,
    Shape,
    Table,
    Group,
    Line,
}

impl ElementType {
    /// Wire tag written into render descriptors
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Shape => "shape",
            ElementType::Table => "table",
            ElementType::Group => "group",
            ElementType::Line => "line",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-left position of an element in slide units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element extent in slide units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Fields every element carries regardless of its kind.
///
/// Geometry is optional; consumers treat a missing value as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementBase {
    pub id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Rotation in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl ElementBase {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            position: None,
            size: None,
            rotation: None,
        }
    }

    pub fn left(&self) -> f64 {
        finite_or_zero(self.position.map(|p| p.x))
    }

    pub fn top(&self) -> f64 {
        finite_or_zero(self.position.map(|p| p.y))
    }

    pub fn width(&self) -> f64 {
        finite_or_zero(self.size.map(|s| s.width))
    }

    pub fn height(&self) -> f64 {
        finite_or_zero(self.size.map(|s| s.height))
    }

    pub fn rotate(&self) -> f64 {
        finite_or_zero(self.rotation)
    }
}

/// Descriptor geometry is always a JSON number; NaN and infinities read as zero.
fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Common interface for all slide elements
pub trait Element: std::fmt::Debug {
    /// Get the shared base record
    fn base(&self) -> &ElementBase;

    /// Get the mutable base record
    fn base_mut(&mut self) -> &mut ElementBase;

    /// Get the kind tag of this element
    fn element_type(&self) -> ElementType;

    fn id(&self) -> &ElementId {
        &self.base().id
    }

    fn position(&self) -> Option<Position> {
        self.base().position
    }

    fn set_position(&mut self, position: Position) {
        self.base_mut().position = Some(position);
    }

    fn size(&self) -> Option<Size> {
        self.base().size
    }

    fn set_size(&mut self, size: Size) {
        self.base_mut().size = Some(size);
    }

    fn rotation(&self) -> Option<f64> {
        self.base().rotation
    }

    fn set_rotation(&mut self, degrees: f64) {
        self.base_mut().rotation = Some(degrees);
    }
}
