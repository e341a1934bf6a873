//! Diagram configuration.
//!
//! Defaults reproduce the standard 550x520 layout. Callers override individual fields with a
//! partial JSON object that is deep-merged over the defaults (see
//! [`DiagramConfig::from_json_overrides`]).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trefoil_core::{Area, Status};

/// The three rings of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Circle {
    Cash,
    Capacity,
    Customers,
}

impl Circle {
    pub const ALL: [Circle; 3] = [Circle::Cash, Circle::Capacity, Circle::Customers];

    pub fn label(self) -> &'static str {
        match self {
            Circle::Cash => "Cash",
            Circle::Capacity => "Capacity",
            Circle::Customers => "Customers",
        }
    }

    /// Segment areas in sweep order (first area starts at the circle's start angle).
    pub fn areas(self) -> [Area; 3] {
        match self {
            Circle::Cash => [
                Area::FinancialControl,
                Area::GrowthStrategy,
                Area::LifestyleExit,
            ],
            Circle::Capacity => [
                Area::DriveChange,
                Area::SystemsAutomation,
                Area::PeopleManagement,
            ],
            Circle::Customers => [
                Area::MarketingLeads,
                Area::SellingSales,
                Area::ServiceReputation,
            ],
        }
    }

    /// The circle holding `area` and the area's position within it.
    pub fn containing(area: Area) -> (Circle, usize) {
        match area {
            Area::FinancialControl => (Circle::Cash, 0),
            Area::GrowthStrategy => (Circle::Cash, 1),
            Area::LifestyleExit => (Circle::Cash, 2),
            Area::DriveChange => (Circle::Capacity, 0),
            Area::SystemsAutomation => (Circle::Capacity, 1),
            Area::PeopleManagement => (Circle::Capacity, 2),
            Area::MarketingLeads => (Circle::Customers, 0),
            Area::SellingSales => (Circle::Customers, 1),
            Area::ServiceReputation => (Circle::Customers, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CirclePlacement {
    pub circle: Circle,
    pub cx: f64,
    pub cy: f64,
    /// Degrees, counter-clockwise from the positive x axis.
    pub start_angle: f64,
    /// An end angle at or below the start wraps through 0°.
    pub end_angle: f64,
}

impl CirclePlacement {
    fn new(circle: Circle, cx: f64, cy: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            circle,
            cx,
            cy,
            start_angle,
            end_angle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub low: String,
    pub medium: String,
    pub high: String,
    pub neutral: String,
    pub overlap: String,
    pub outline: String,
    pub background: String,
    pub category_text: String,
    pub segment_text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            low: "#E53935".to_string(),
            medium: "#FFB300".to_string(),
            high: "#43A047".to_string(),
            neutral: "#E0E0E0".to_string(),
            overlap: "#D0D0D0".to_string(),
            outline: "#888".to_string(),
            background: "white".to_string(),
            category_text: "#333".to_string(),
            segment_text: "#555".to_string(),
        }
    }
}

impl Palette {
    pub fn fill(&self, status: Status) -> &str {
        match status {
            Status::Low => &self.low,
            Status::Medium => &self.medium,
            Status::High => &self.high,
        }
    }

    /// Reverse of [`Palette::fill`], ignoring ASCII case.
    pub fn status_for_fill(&self, fill: &str) -> Option<Status> {
        let fill = fill.trim();
        Status::ALL
            .into_iter()
            .find(|s| self.fill(*s).eq_ignore_ascii_case(fill))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagramConfig {
    pub width: f64,
    pub height: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub outline_width: f64,
    /// One placement per [`Circle`], drawn in this order.
    pub circles: [CirclePlacement; 3],
    /// Distance beyond the outer radius at which segment labels sit.
    pub label_offset: f64,
    /// Greedy wrap budget for segment labels, in terminal cells.
    pub label_wrap_width: usize,
    pub label_line_height: f64,
    pub category_font_size: f64,
    pub segment_font_size: f64,
    pub font_family: String,
    pub palette: Palette,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: 550.0,
            height: 520.0,
            outer_radius: 130.0,
            inner_radius: 85.0,
            outline_width: 2.0,
            circles: [
                CirclePlacement::new(Circle::Cash, 190.0, 180.0, 49.0, 251.0),
                CirclePlacement::new(Circle::Capacity, 360.0, 180.0, 289.0, 131.0),
                CirclePlacement::new(Circle::Customers, 275.0, 330.0, 168.0, 12.0),
            ],
            label_offset: 25.0,
            label_wrap_width: 12,
            label_line_height: 12.0,
            category_font_size: 16.0,
            segment_font_size: 10.0,
            font_family: "Arial, sans-serif".to_string(),
            palette: Palette::default(),
        }
    }
}

impl DiagramConfig {
    /// Deep-merges `overrides` over the defaults. Objects merge key by key; anything else
    /// (including the `circles` array) replaces the default wholesale.
    pub fn from_json_overrides(overrides: &Value) -> Result<Self> {
        let mut base = serde_json::to_value(Self::default())?;
        deep_merge_value(&mut base, overrides);
        let config: Self = serde_json::from_value(base)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let overrides: Value = serde_json::from_str(text)?;
        Self::from_json_overrides(&overrides)
    }

    pub fn placement(&self, circle: Circle) -> Option<&CirclePlacement> {
        self.circles.iter().find(|p| p.circle == circle)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("outerRadius", self.outer_radius),
            ("labelLineHeight", self.label_line_height),
            ("categoryFontSize", self.category_font_size),
            ("segmentFontSize", self.segment_font_size),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(invalid(format!("{name} must be a positive number, got {v}")));
            }
        }
        for (name, v) in [
            ("innerRadius", self.inner_radius),
            ("outlineWidth", self.outline_width),
            ("labelOffset", self.label_offset),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(invalid(format!("{name} must be a non-negative number, got {v}")));
            }
        }
        if self.inner_radius >= self.outer_radius {
            return Err(invalid(format!(
                "innerRadius ({}) must be smaller than outerRadius ({})",
                self.inner_radius, self.outer_radius
            )));
        }
        if self.label_wrap_width == 0 {
            return Err(invalid("labelWrapWidth must be at least 1".to_string()));
        }

        for circle in Circle::ALL {
            let count = self.circles.iter().filter(|p| p.circle == circle).count();
            if count != 1 {
                return Err(invalid(format!(
                    "circle `{}` must be placed exactly once, found {count}",
                    circle.label().to_ascii_lowercase()
                )));
            }
        }
        for p in &self.circles {
            let finite = [p.cx, p.cy, p.start_angle, p.end_angle]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(invalid(format!(
                    "circle `{}` has a non-finite coordinate or angle",
                    p.circle.label().to_ascii_lowercase()
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn circles_partition_the_areas() {
        let mut seen = Vec::new();
        for circle in Circle::ALL {
            for (pos, area) in circle.areas().into_iter().enumerate() {
                assert_eq!(Circle::containing(area), (circle, pos));
                seen.push(area);
            }
        }
        seen.sort();
        assert_eq!(seen, Area::ALL.to_vec());
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = DiagramConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.placement(Circle::Capacity).unwrap().start_angle, 289.0);
        assert_eq!(cfg.palette.fill(Status::Medium), "#FFB300");
    }

    #[test]
    fn default_text_colors() {
        let palette = Palette::default();
        assert_eq!(palette.category_text, "#333");
        assert_eq!(palette.segment_text, "#555");
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let cfg = DiagramConfig::from_json_overrides(&json!({
            "outerRadius": 150,
            "palette": { "low": "#ff0000" }
        }))
        .unwrap();
        assert_eq!(cfg.outer_radius, 150.0);
        assert_eq!(cfg.inner_radius, 85.0);
        assert_eq!(cfg.palette.low, "#ff0000");
        assert_eq!(cfg.palette.high, "#43A047");
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let err = DiagramConfig::from_json_overrides(&json!({ "innerRadius": 200 })).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
        assert!(err.to_string().contains("innerRadius"));

        let mut cfg = DiagramConfig::default();
        cfg.circles[2].circle = Circle::Cash;
        assert!(cfg.validate().is_err());

        assert!(matches!(
            DiagramConfig::from_json_str("{\"width\": \"wide\"}"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn fill_lookup_is_case_insensitive() {
        let palette = Palette::default();
        assert_eq!(palette.status_for_fill("#e53935"), Some(Status::Low));
        assert_eq!(palette.status_for_fill("#43A047"), Some(Status::High));
        assert_eq!(palette.status_for_fill("#E0E0E0"), None);
    }
}
