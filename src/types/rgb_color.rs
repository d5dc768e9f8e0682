// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type for panel control.
//!
//! RGB is a distinct command type on the wire; this client never converts
//! between RGB and HSL.

use std::fmt;

/// RGB color representation.
///
/// Each channel is 0-255, carried by the `u8` type itself, so construction
/// cannot fail. The color is written to the device as a hex field.
///
/// # Examples
///
/// ```
/// use leafctl::types::RgbColor;
///
/// let orange = RgbColor::new(255, 128, 0);
/// assert_eq!(orange.red(), 255);
/// assert_eq!(orange.green(), 128);
/// assert_eq!(orange.blue(), 0);
/// assert_eq!(orange.to_hex(), "#FF8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    ///
    /// # Arguments
    ///
    /// * `red` - Red channel (0-255)
    /// * `green` - Green channel (0-255)
    /// * `blue` - Blue channel (0-255)
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the red channel value.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel value.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel value.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as an uppercase hex string with the hash prefix,
    /// the form the device's `rgb` state field accepts.
    ///
    /// # Examples
    ///
    /// ```
    /// use leafctl::types::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_color_channels() {
        let color = RgbColor::new(10, 20, 30);
        assert_eq!(color.red(), 10);
        assert_eq!(color.green(), 20);
        assert_eq!(color.blue(), 30);
    }

    #[test]
    fn rgb_color_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbColor::new(0, 255, 0).to_hex(), "#00FF00");
        assert_eq!(RgbColor::new(0, 0, 255).to_hex(), "#0000FF");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(255, 255, 255).to_hex(), "#FFFFFF");
    }

    #[test]
    fn rgb_color_hex_zero_padding() {
        assert_eq!(RgbColor::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn rgb_color_display() {
        assert_eq!(RgbColor::new(255, 128, 0).to_string(), "#FF8000");
    }

    #[test]
    fn rgb_color_from_tuple() {
        let color = RgbColor::from((5, 10, 15));
        assert_eq!(color, RgbColor::new(5, 10, 15));
    }
}
