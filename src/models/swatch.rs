//! Swatch data structures and their JSON representation.
//!
//! A swatches file is a JSON array of groups. Each group has a name and an
//! ordered list of HSB entries:
//!
//! ```json
//! [{"name":"Ocean","swatches":[{"hue":0.0,"saturation":0.0,"brightness":1.0,"alpha":1,"colorSpace":0}]}]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RgbColor;
use crate::constants::SWATCH_ALPHA;

/// Color space identifier stored with each swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Hue, saturation, brightness.
    #[default]
    Hsb,
}

impl ColorSpace {
    /// Numeric identifier used in the file format.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Hsb => 0,
        }
    }

    /// Looks up a color space by its numeric identifier, as read from
    /// `colorSpace` when deserializing.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Hsb),
            _ => None,
        }
    }
}

impl Serialize for ColorSpace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for ColorSpace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u8::deserialize(deserializer)?;
        Self::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown color space id {id}")))
    }
}

/// A single color in HSB form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwatchEntry {
    /// Hue as a fraction of a full turn, in `[0, 1)`.
    pub hue: f64,
    /// Saturation (0.0-1.0).
    pub saturation: f64,
    /// Brightness, the HSV value component (0.0-1.0).
    pub brightness: f64,
    /// Opacity; always 1.
    pub alpha: u8,
    /// Color space of the components above.
    #[serde(rename = "colorSpace")]
    pub color_space: ColorSpace,
}

impl SwatchEntry {
    /// Builds an entry from an RGB color, normalizing hue degrees to a fraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatches::models::{RgbColor, SwatchEntry};
    ///
    /// let entry = SwatchEntry::from_rgb(RgbColor::new(0, 255, 0));
    /// assert!((entry.hue - 1.0 / 3.0).abs() < 1e-9);
    /// assert_eq!(entry.alpha, 1);
    /// ```
    #[must_use]
    pub fn from_rgb(color: RgbColor) -> Self {
        let (h, s, v) = color.to_hsv();
        Self {
            hue: h / 360.0,
            saturation: s,
            brightness: v,
            alpha: SWATCH_ALPHA,
            color_space: ColorSpace::Hsb,
        }
    }

    /// Compares two entries, allowing for float drift from a JSON round trip.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-9;
        (self.hue - other.hue).abs() < EPSILON
            && (self.saturation - other.saturation).abs() < EPSILON
            && (self.brightness - other.brightness).abs() < EPSILON
            && self.alpha == other.alpha
            && self.color_space == other.color_space
    }

    /// Converts the entry back to the nearest RGB color.
    ///
    /// Inverse of [`SwatchEntry::from_rgb`] up to channel rounding; useful for
    /// checking what a stored swatch will display as.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsv(self.hue * 360.0, self.saturation, self.brightness)
    }
}

/// A named, ordered collection of swatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchGroup {
    /// Group name shown by the design application.
    pub name: String,
    /// Entries in input order.
    pub swatches: Vec<SwatchEntry>,
}

impl SwatchGroup {
    /// Creates a group with one entry per color, preserving order.
    #[must_use]
    pub fn from_colors(name: impl Into<String>, colors: &[RgbColor]) -> Self {
        Self {
            name: name.into(),
            swatches: colors.iter().copied().map(SwatchEntry::from_rgb).collect(),
        }
    }

    /// Number of swatches in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Returns true if the group holds no swatches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

/// Top-level contents of `Swatches.json`: an ordered list of groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwatchFile {
    groups: Vec<SwatchGroup>,
}

impl SwatchFile {
    /// Wraps a single group, which is what the command line tool emits.
    #[must_use]
    pub fn single(group: SwatchGroup) -> Self {
        Self {
            groups: vec![group],
        }
    }

    /// Groups in file order.
    #[must_use]
    pub fn groups(&self) -> &[SwatchGroup] {
        &self.groups
    }

    /// Total number of swatches across all groups.
    #[must_use]
    pub fn swatch_count(&self) -> usize {
        self.groups.iter().map(SwatchGroup::len).sum()
    }

    /// Compares two files group by group using [`SwatchEntry::approx_eq`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.groups.len() == other.groups.len()
            && self.groups.iter().zip(&other.groups).all(|(a, b)| {
                a.name == b.name
                    && a.len() == b.len()
                    && a.swatches.iter().zip(&b.swatches).all(|(x, y)| x.approx_eq(y))
            })
    }

    /// Serializes the file to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (non-finite floats).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize swatches to JSON")
    }

    /// Parses a file from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid swatches document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse swatches JSON")
    }
}
