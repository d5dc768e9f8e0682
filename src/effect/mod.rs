// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Custom-effect frames and the animation-data codec.
//!
//! A custom effect streams one color-and-transition instruction per panel to
//! the device instead of selecting a stored effect. The codec packs an
//! ordered frame sequence into the device's big-endian animation-data layout
//! and renders the bytes as the text form the JSON transport carries. The
//! codec is pure; the surrounding JSON envelope is built by the command
//! layer.

use std::io::{self, Write};

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::EffectError;

/// Keyframes per panel in the animation data. The layout reserves a 16-bit
/// count for multi-keyframe animations; this client always sends one.
const KEYFRAMES_PER_PANEL: u16 = 1;

/// Packed size of one frame: panel id (2) + keyframe count (2) + RGB (3) +
/// white pad (1) + transition time (2).
const FRAME_BYTES: usize = 10;

/// One per-panel instruction in a custom-effect stream.
///
/// The field widths carry the wire format's range contracts: panel ids and
/// transition times are 16-bit, color channels 8-bit, so construction cannot
/// produce an unencodable frame. Transition time is in device ticks of
/// 100 ms.
///
/// # Examples
///
/// ```
/// use leafctl::effect::EffectFrame;
///
/// let frame = EffectFrame::new(7, 255, 0, 0, 10);
/// assert_eq!(frame.panel_id(), 7);
/// assert_eq!(frame.transition_time(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectFrame {
    panel_id: u16,
    red: u8,
    green: u8,
    blue: u8,
    transition_time: u16,
}

impl EffectFrame {
    /// Creates a new effect frame.
    ///
    /// # Arguments
    ///
    /// * `panel_id` - Address of the panel this frame targets (0-65535)
    /// * `red` / `green` / `blue` - Target color channels (0-255)
    /// * `transition_time` - Fade duration in 100 ms ticks (0-65535)
    #[must_use]
    pub const fn new(panel_id: u16, red: u8, green: u8, blue: u8, transition_time: u16) -> Self {
        Self {
            panel_id,
            red,
            green,
            blue,
            transition_time,
        }
    }

    /// Returns the target panel id.
    #[must_use]
    pub const fn panel_id(&self) -> u16 {
        self.panel_id
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

    /// Returns the transition time in 100 ms ticks.
    #[must_use]
    pub const fn transition_time(&self) -> u16 {
        self.transition_time
    }
}

/// An ordered, non-empty sequence of effect frames.
///
/// Order is transmission order; frames address independent panels, so it has
/// no further meaning. The stream owns the animation-data encoding:
/// [`to_anim_bytes`](Self::to_anim_bytes) produces the packed binary layout
/// and [`to_anim_data`](Self::to_anim_data) the payload text the device's
/// JSON transport expects.
///
/// # Examples
///
/// ```
/// use leafctl::effect::{EffectFrame, EffectStream};
///
/// let stream = EffectStream::new(vec![EffectFrame::new(7, 255, 0, 0, 10)]).unwrap();
/// assert_eq!(stream.to_anim_bytes().len(), 12);
/// assert_eq!(stream.to_anim_data(), "0 1 0 7 0 1 255 0 0 0 0 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectStream {
    frames: Vec<EffectFrame>,
}

impl EffectStream {
    /// Creates a stream from an ordered frame list.
    ///
    /// # Errors
    ///
    /// Returns `EffectError::Empty` for an empty list and
    /// `EffectError::TooManyFrames` when the list exceeds the wire format's
    /// 16-bit frame count.
    pub fn new(frames: Vec<EffectFrame>) -> Result<Self, EffectError> {
        if frames.is_empty() {
            return Err(EffectError::Empty);
        }
        if frames.len() > usize::from(u16::MAX) {
            return Err(EffectError::TooManyFrames(frames.len()));
        }
        Ok(Self { frames })
    }

    /// Returns the frames in transmission order.
    #[must_use]
    pub fn frames(&self) -> &[EffectFrame] {
        &self.frames
    }

    /// Packs the stream into the device's animation-data binary layout.
    ///
    /// Big-endian throughout: a 16-bit frame count, then per frame the panel
    /// id (16-bit), a keyframe count of 1 (16-bit), red, green, blue, a zero
    /// white-channel pad, and the transition time (16-bit). The result is
    /// always `2 + 10 * N` bytes for `N` frames.
    #[must_use]
    pub fn to_anim_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.frames.len() * FRAME_BYTES);
        // Safe: writing to a Vec cannot fail
        pack_frames(&self.frames, &mut buf).expect("Vec write is infallible");
        buf
    }

    /// Renders the packed bytes as the payload text carried inside the
    /// effect-write JSON body: each byte as an unsigned decimal, separated
    /// by single spaces.
    #[must_use]
    pub fn to_anim_data(&self) -> String {
        anim_text(&self.to_anim_bytes())
    }
}

fn pack_frames(frames: &[EffectFrame], buf: &mut impl Write) -> io::Result<()> {
    // Count fits: stream construction caps the frame list at u16::MAX.
    #[allow(clippy::cast_possible_truncation)]
    buf.write_u16::<BigEndian>(frames.len() as u16)?;
    for frame in frames {
        buf.write_u16::<BigEndian>(frame.panel_id)?;
        buf.write_u16::<BigEndian>(KEYFRAMES_PER_PANEL)?;
        buf.write_u8(frame.red)?;
        buf.write_u8(frame.green)?;
        buf.write_u8(frame.blue)?;
        buf.write_u8(0)?;
        buf.write_u16::<BigEndian>(frame.transition_time)?;
    }
    Ok(())
}

fn anim_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
