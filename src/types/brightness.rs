// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for panel dimming.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// The panel uses 0-100 for brightness, where 0 is off and 100 is full
/// brightness. Out-of-range input is rejected, never clamped.
///
/// # Examples
///
/// ```
/// use leafctl::types::Brightness;
///
/// // Create a brightness at 75%
/// let b = Brightness::new(75).unwrap();
/// assert_eq!(b.value(), 75);
///
/// // Use predefined values
/// let off = Brightness::MIN;
/// let full = Brightness::MAX;
/// assert_eq!(off.value(), 0);
/// assert_eq!(full.value(), 100);
///
/// // Invalid values return error
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness value (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Arguments
    ///
    /// * `value` - The brightness percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use leafctl::types::Brightness;
    ///
    /// let b = Brightness::new(50).unwrap();
    /// assert_eq!(b.value(), 50);
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                field: "brightness",
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in 0..=100 {
            let b = Brightness::new(v).unwrap();
            assert_eq!(b.value(), v);
        }
    }

    #[test]
    fn brightness_invalid_value() {
        let result = Brightness::new(101);
        assert!(matches!(
            result,
            Err(ValueError::OutOfRange {
                field: "brightness",
                actual: 101,
                ..
            })
        ));
    }

    #[test]
    fn brightness_try_from() {
        assert_eq!(Brightness::try_from(30).unwrap().value(), 30);
        assert!(Brightness::try_from(255).is_err());
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn brightness_ordering() {
        assert!(Brightness::MIN < Brightness::MAX);
        assert!(Brightness::new(50).unwrap() < Brightness::new(75).unwrap());
    }
}
