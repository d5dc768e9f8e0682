// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `leafctl` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, effect stream construction, transport communication,
//! response parsing, and device-reported failures.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with a light panel.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while building a custom effect.
    #[error("effect error: {0}")]
    Effect(#[from] EffectError),

    /// Error occurred during transport communication.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device reported a failure.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range for its field.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The field the value was provided for.
        field: &'static str,
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },
}

/// Errors related to custom effect streams.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// A custom effect stream must contain at least one frame.
    #[error("effect stream contains no frames")]
    Empty,

    /// The wire format counts frames in a 16-bit field.
    #[error("effect stream has {0} frames, limit is 65535")]
    TooManyFrames(usize),
}

/// Errors related to transport communication.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection, DNS, or timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing panel responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response JSON was malformed or missing a required field;
    /// the underlying message names the offending path.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by the device itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device rejected the access token.
    #[error("access token rejected by the device")]
    Unauthorized,

    /// The device returned a non-success status.
    #[error("device returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code returned by the device.
        status: u16,
        /// Response body accompanying the status.
        body: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
