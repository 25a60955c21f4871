use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS-style hex string (`#rrggbb`, or `#rrggbbaa` when not
/// fully opaque).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidConfig(format!("color `{input}` must start with `#`"))
        })?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidConfig(format!(
                "color `{input}` contains non-hex characters"
            )));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| {
                ChartError::InvalidConfig(format!("color `{input}` contains non-hex characters"))
            })
        };

        match digits.len() {
            3 => {
                let mut expanded = [0_u8; 3];
                for (slot, index) in expanded.iter_mut().zip(0..3) {
                    let nibble = channel(&digits[index..=index])?;
                    *slot = nibble * 17;
                }
                Ok(Self::rgb8(expanded[0], expanded[1], expanded[2]))
            }
            6 | 8 => {
                let red = channel(&digits[0..2])?;
                let green = channel(&digits[2..4])?;
                let blue = channel(&digits[4..6])?;
                let alpha = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    u8::MAX
                };
                Ok(Self::rgb8(red, green, blue).with_alpha(f64::from(alpha) / 255.0))
            }
            _ => Err(ChartError::InvalidConfig(format!(
                "color `{input}` must have 3, 6 or 8 hex digits"
            ))),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut hex = format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        );
        if to_byte(self.alpha) != u8::MAX {
            hex.push_str(&format!("{:02x}", to_byte(self.alpha)));
        }
        hex
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Stroke settings for the connecting polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineStyle {
    pub color: Color,
    pub width: f64,
}

impl PolylineStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fill and outline settings for the circular point markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl MarkerStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidConfig(
                "marker radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "marker stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}
