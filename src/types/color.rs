// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for panel control.
//!
//! This module provides types for HSL color and Kelvin color temperature
//! control on light panels.

use std::fmt;

use crate::error::ValueError;

/// HSL color representation (Hue, Saturation, Lightness).
///
/// The panel has no native lightness channel; the lightness component is
/// written to the device's brightness field as part of one combined state
/// update.
///
/// # Examples
///
/// ```
/// use leafctl::types::HslColor;
///
/// // Create a pure red color at half lightness
/// let red = HslColor::new(0, 100, 50).unwrap();
/// assert_eq!(red.hue(), 0);
/// assert_eq!(red.saturation(), 100);
/// assert_eq!(red.lightness(), 50);
///
/// // 360 is the inclusive maximum
/// assert!(HslColor::new(361, 100, 50).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HslColor {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl HslColor {
    /// Maximum hue value in degrees.
    pub const MAX_HUE: u16 = 360;

    /// Maximum saturation value.
    pub const MAX_SATURATION: u8 = 100;

    /// Maximum lightness value.
    pub const MAX_LIGHTNESS: u8 = 100;

    /// Creates a new HSL color.
    ///
    /// # Arguments
    ///
    /// * `hue` - Color hue (0-360 degrees, where 0/360 is red)
    /// * `saturation` - Color saturation (0-100%)
    /// * `lightness` - Color lightness (0-100%)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` naming the offending field if any
    /// value is outside its valid range.
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Result<Self, ValueError> {
        if hue > Self::MAX_HUE {
            return Err(ValueError::OutOfRange {
                field: "hue",
                min: 0,
                max: Self::MAX_HUE,
                actual: hue,
            });
        }
        if saturation > Self::MAX_SATURATION {
            return Err(ValueError::OutOfRange {
                field: "saturation",
                min: 0,
                max: u16::from(Self::MAX_SATURATION),
                actual: u16::from(saturation),
            });
        }
        if lightness > Self::MAX_LIGHTNESS {
            return Err(ValueError::OutOfRange {
                field: "lightness",
                min: 0,
                max: u16::from(Self::MAX_LIGHTNESS),
                actual: u16::from(lightness),
            });
        }
        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// Returns the hue value (0-360).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation value (0-100).
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Returns the lightness value (0-100).
    #[must_use]
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSL({}°, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Color temperature in Kelvin (1200-6500).
///
/// Lower values are warmer (more orange), higher values are cooler (bluer).
///
/// # Examples
///
/// ```
/// use leafctl::types::ColorTemperature;
///
/// let ct = ColorTemperature::new(4000).unwrap();
/// assert_eq!(ct.value(), 4000);
///
/// assert!(ColorTemperature::new(1199).is_err());
/// assert!(ColorTemperature::new(6501).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Minimum color temperature (warmest).
    pub const MIN: u16 = 1200;

    /// Maximum color temperature (coolest).
    pub const MAX: u16 = 6500;

    /// Creates a new color temperature value.
    ///
    /// # Arguments
    ///
    /// * `value` - The color temperature in Kelvin (1200-6500)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [1200, 6500].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                field: "color temperature",
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the color temperature value in Kelvin.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for ColorTemperature {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}
