// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire codec for mouse-event metadata.
//!
//! The transport layer delivers drop metadata as an opaque string; this module
//! decodes it into [`MouseDetails`] so the reordering engine can work with
//! plain client coordinates. The format is a fixed comma-separated record:
//!
//! ```text
//! button,client_x,client_y,alt,ctrl,meta,shift
//! ```
//!
//! where `button` is the DOM button code and the modifier fields are `0`/`1`.
//! A payload that does not decode aborts that single drop with a [`WireError`];
//! other sessions are unaffected.

use alloc::string::String;
use core::fmt;
use kurbo::Vec2;

/// Mouse button carried in drop metadata. DOM button codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (code 0).
    #[default]
    Left,
    /// Auxiliary button (code 1).
    Middle,
    /// Secondary button (code 2).
    Right,
}

impl MouseButton {
    const fn code(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

/// Decoded mouse-event metadata for one pointer event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MouseDetails {
    /// Button involved in the event.
    pub button: MouseButton,
    /// Client X coordinate.
    pub client_x: i32,
    /// Client Y coordinate.
    pub client_y: i32,
    /// Alt key held.
    pub alt: bool,
    /// Ctrl key held.
    pub ctrl: bool,
    /// Meta key held.
    pub meta: bool,
    /// Shift key held.
    pub shift: bool,
}

/// Field count of the serialized record.
const FIELD_COUNT: usize = 7;

const FIELD_NAMES: [&str; FIELD_COUNT] =
    ["button", "client_x", "client_y", "alt", "ctrl", "meta", "shift"];

impl MouseDetails {
    /// Encode into the wire format.
    pub fn serialize(&self) -> String {
        use core::fmt::Write as _;
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{},{},{},{},{},{},{}",
            self.button.code(),
            self.client_x,
            self.client_y,
            u8::from(self.alt),
            u8::from(self.ctrl),
            u8::from(self.meta),
            u8::from(self.shift),
        );
        out
    }

    /// Decode from the wire format.
    pub fn parse(raw: &str) -> Result<Self, WireError> {
        if raw.is_empty() {
            return Err(WireError::Empty);
        }
        let mut fields = [""; FIELD_COUNT];
        let mut found = 0;
        for part in raw.split(',') {
            if found == FIELD_COUNT {
                found += 1;
                break;
            }
            fields[found] = part;
            found += 1;
        }
        if found != FIELD_COUNT {
            return Err(WireError::FieldCount {
                expected: FIELD_COUNT,
                found,
            });
        }

        let field_err = |index: usize| WireError::Field {
            index,
            name: FIELD_NAMES[index],
        };

        let button_code: u8 = fields[0].parse().map_err(|_| field_err(0))?;
        let button = MouseButton::from_code(button_code).ok_or_else(|| field_err(0))?;
        let client_x: i32 = fields[1].parse().map_err(|_| field_err(1))?;
        let client_y: i32 = fields[2].parse().map_err(|_| field_err(2))?;

        let mut flags = [false; 4];
        for (i, flag) in flags.iter_mut().enumerate() {
            *flag = match fields[3 + i] {
                "0" => false,
                "1" => true,
                _ => return Err(field_err(3 + i)),
            };
        }

        Ok(Self {
            button,
            client_x,
            client_y,
            alt: flags[0],
            ctrl: flags[1],
            meta: flags[2],
            shift: flags[3],
        })
    }

    /// Pointer travel from `down` to `self`, as used by free-canvas moves.
    pub fn delta_from(&self, down: &Self) -> Vec2 {
        Vec2::new(
            f64::from(self.client_x - down.client_x),
            f64::from(self.client_y - down.client_y),
        )
    }
}

/// Decode failure for a drop-metadata payload.
///
/// Fatal for the single drop that carried the payload; the caller aborts that
/// drop and other sessions proceed untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WireError {
    /// The payload was empty.
    Empty,
    /// The payload had the wrong number of comma-separated fields.
    FieldCount {
        /// Fields required by the format.
        expected: usize,
        /// Fields present in the payload (saturates one past `expected`).
        found: usize,
    },
    /// A field failed to decode.
    Field {
        /// Zero-based field index.
        index: usize,
        /// Field name in the record layout.
        name: &'static str,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty mouse-details payload"),
            Self::FieldCount { expected, found } => write!(
                f,
                "mouse-details payload has wrong field count: expected {expected}, found {found}"
            ),
            Self::Field { index, name } => {
                write!(f, "mouse-details field {index} ({name}) failed to decode")
            }
        }
    }
}

impl core::error::Error for WireError {}
