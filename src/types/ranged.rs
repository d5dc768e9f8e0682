// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A measured quantity with an optional device-reported range.

use serde::Deserialize;

/// A value paired with the valid range the device reported for it.
///
/// Panels attach `min`/`max` bounds to most state fields (hue, saturation,
/// brightness, color temperature, orientation). Bounds the device did not
/// report stay `None`; they are never defaulted to zero, which would be
/// indistinguishable from a real bound.
///
/// Invariant (device-guaranteed, not re-checked here): when both bounds are
/// present, `min <= value <= max`.
///
/// # Examples
///
/// ```
/// use leafctl::types::RangedValue;
///
/// let hue: RangedValue<u16> =
///     serde_json::from_str(r#"{"value": 120, "min": 0, "max": 360}"#).unwrap();
/// assert_eq!(hue.value, 120);
/// assert_eq!(hue.bounds(), Some((0, 360)));
///
/// let unbounded: RangedValue<u16> = serde_json::from_str(r#"{"value": 120}"#).unwrap();
/// assert_eq!(unbounded.bounds(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct RangedValue<T> {
    /// The measured value.
    pub value: T,
    /// Minimum the device reported, if any.
    #[serde(default)]
    pub min: Option<T>,
    /// Maximum the device reported, if any.
    #[serde(default)]
    pub max: Option<T>,
}

impl<T: Copy> RangedValue<T> {
    /// Returns both bounds when the device reported them.
    #[must_use]
    pub fn bounds(&self) -> Option<(T, T)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_bounds() {
        let v: RangedValue<u16> =
            serde_json::from_str(r#"{"value": 50, "min": 0, "max": 100}"#).unwrap();
        assert_eq!(v.value, 50);
        assert_eq!(v.min, Some(0));
        assert_eq!(v.max, Some(100));
        assert_eq!(v.bounds(), Some((0, 100)));
    }

    #[test]
    fn deserializes_without_bounds() {
        let v: RangedValue<u16> = serde_json::from_str(r#"{"value": 50}"#).unwrap();
        assert_eq!(v.value, 50);
        assert_eq!(v.min, None);
        assert_eq!(v.max, None);
        assert_eq!(v.bounds(), None);
    }

    #[test]
    fn one_sided_bound_is_not_a_range() {
        let v: RangedValue<u16> = serde_json::from_str(r#"{"value": 50, "min": 0}"#).unwrap();
        assert_eq!(v.min, Some(0));
        assert_eq!(v.bounds(), None);
    }

    #[test]
    fn deserializes_bool_value() {
        let v: RangedValue<bool> = serde_json::from_str(r#"{"value": true}"#).unwrap();
        assert!(v.value);
        assert_eq!(v.bounds(), None);
    }

    #[test]
    fn missing_value_is_an_error() {
        let result: Result<RangedValue<u16>, _> = serde_json::from_str(r#"{"min": 0}"#);
        assert!(result.is_err());
    }
}
