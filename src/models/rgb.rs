//! RGB color handling with hex parsing and HSV conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSV conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a `#RRGGBB` hex string.
    ///
    /// The leading `#` is mandatory and exactly six hex digits must follow
    /// (either case). Nothing is trimmed; the three-digit short form is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatches::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("00FF00").is_err());
    /// assert!(RgbColor::from_hex("#0F0").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `#RRGGBB` color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let Some(digits) = hex.strip_prefix('#') else {
            anyhow::bail!("Invalid hex color '{hex}'. Expected a leading '#'");
        };

        if digits.len() != 6 {
            anyhow::bail!("Invalid hex color '{hex}'. Expected 6 hex digits (#RRGGBB)");
        }

        // from_str_radix accepts a leading '+', so check the digits up front
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Contains non-hex characters");
        }

        let r = u8::from_str_radix(&digits[0..2], 16)
            .with_context(|| format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .with_context(|| format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .with_context(|| format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use swatches::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSV (Hue, Saturation, Value) color space.
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, v)` where:
    /// - `h` (Hue): degrees in `[0.0, 360.0)` (0.0 for grayscale)
    /// - `s` (Saturation): 0.0-1.0
    /// - `v` (Value/Brightness): 0.0-1.0
    ///
    /// # Examples
    ///
    /// ```
    /// use swatches::models::RgbColor;
    ///
    /// let (h, s, v) = RgbColor::new(0, 0, 255).to_hsv();
    /// assert!((h - 240.0).abs() < 1e-9);
    /// assert!((s - 1.0).abs() < 1e-9);
    /// assert!((v - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        let h = if delta == 0.0 {
            0.0 // Grayscale, hue is undefined
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        // Keep hue in [0, 360) so the normalized fraction stays below 1
        let h = if h < 0.0 { h + 360.0 } else { h };
        let h = if h >= 360.0 { h - 360.0 } else { h };

        (h, s, v)
    }

    /// Creates an `RgbColor` from HSV (Hue, Saturation, Value) color space.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees (0.0-360.0, will be clamped)
    /// * `s` - Saturation (0.0-1.0, will be clamped)
    /// * `v` - Value/Brightness (0.0-1.0, will be clamped)
    ///
    /// # Examples
    ///
    /// ```
    /// use swatches::models::RgbColor;
    ///
    /// let green = RgbColor::from_hsv(120.0, 1.0, 1.0);
    /// assert_eq!(green, RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.clamp(0.0, 360.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
