//! Gamepad and joystick handles
//!
//! A [`DeviceHandle`] pairs a backend device id with an optional per-backend
//! side allocation. A handle whose `native` slot is empty is the documented
//! "invalid" state: opening a device that is not connected yields one, and
//! closing a handle empties it. Every query on an invalid, closed or
//! physically disconnected handle returns a safe default.
//!
//! ## Axis normalization
//! Backends report axes in their native raw range. [`AxisRange::normalize`]
//! maps that range onto `[-1.0, 1.0]` with separate divisors for the negative
//! and positive halves, so both extremes land exactly on -1.0 and 1.0 even for
//! asymmetric ranges such as `i16`.

use crate::event::DeviceId;

/// Device classification at connection time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Device with a standard gamepad mapping
    Gamepad,
    /// Any other joystick-like device
    Joystick,
}

/// Handle to an opened device
///
/// `D` is the backend's side allocation. It is taken out of the handle when
/// the device is closed, so it is released exactly once.
#[derive(Debug)]
pub struct DeviceHandle<D> {
    id: DeviceId,
    kind: DeviceKind,
    native: Option<D>,
}

impl<D> DeviceHandle<D> {
    /// Handle in the invalid state
    pub fn empty(id: DeviceId, kind: DeviceKind) -> Self {
        Self {
            id,
            kind,
            native: None,
        }
    }

    pub(crate) fn open(id: DeviceId, kind: DeviceKind, native: D) -> Self {
        Self {
            id,
            kind,
            native: Some(native),
        }
    }

    /// Device id this handle was opened for
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Requested kind
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Whether the handle holds an open device
    pub fn is_valid(&self) -> bool {
        self.native.is_some()
    }

    /// Backend side allocation, if open
    pub fn native(&self) -> Option<&D> {
        self.native.as_ref()
    }

    pub(crate) fn take_native(&mut self) -> Option<D> {
        self.native.take()
    }
}

/// Raw axis range reported by a backend
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    /// Most negative raw sample (must be negative)
    pub min: f32,
    /// Most positive raw sample (must be positive)
    pub max: f32,
}

impl AxisRange {
    /// Signed 16-bit samples, `-32768..=32767`
    pub const I16: AxisRange = AxisRange {
        min: -32768.0,
        max: 32767.0,
    };

    /// Percentage samples, `-100..=100`
    pub const PERCENT: AxisRange = AxisRange {
        min: -100.0,
        max: 100.0,
    };

    /// Custom range
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map a raw sample onto `[-1.0, 1.0]`
    ///
    /// `min` maps to exactly -1.0, `max` to exactly 1.0 and zero to 0.0.
    /// Out-of-range samples are clamped.
    pub fn normalize(&self, raw: f32) -> f32 {
        let value = if raw < 0.0 {
            raw / -self.min
        } else {
            raw / self.max
        };
        normalize_f32(value)
    }
}

/// Clamp an axis already expressed as a float onto `[-1.0, 1.0]`
///
/// NaN becomes 0.0.
pub fn normalize_f32(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i16_extremes_are_exact() {
        assert_eq!(AxisRange::I16.normalize(-32768.0), -1.0);
        assert_eq!(AxisRange::I16.normalize(32767.0), 1.0);
        assert_eq!(AxisRange::I16.normalize(0.0), 0.0);
    }

    #[test]
    fn test_percent_extremes_are_exact() {
        assert_eq!(AxisRange::PERCENT.normalize(-100.0), -1.0);
        assert_eq!(AxisRange::PERCENT.normalize(100.0), 1.0);
        assert_eq!(AxisRange::PERCENT.normalize(50.0), 0.5);
    }

    #[test]
    fn test_normalize_is_monotonic() {
        let mut last = -1.0f32;
        for raw in (i16::MIN as i32..=i16::MAX as i32).step_by(97) {
            let v = AxisRange::I16.normalize(raw as f32);
            assert!(v >= last, "raw {raw} -> {v} < {last}");
            assert!((-1.0..=1.0).contains(&v));
            last = v;
        }
        assert!(AxisRange::I16.normalize(i16::MAX as f32) >= last);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(AxisRange::PERCENT.normalize(250.0), 1.0);
        assert_eq!(AxisRange::PERCENT.normalize(-250.0), -1.0);
        assert_eq!(normalize_f32(1.5), 1.0);
        assert_eq!(normalize_f32(f32::NAN), 0.0);
    }

    #[test]
    fn test_handle_states() {
        let mut handle = DeviceHandle::open(DeviceId(2), DeviceKind::Gamepad, 7u8);
        assert!(handle.is_valid());
        assert_eq!(handle.native(), Some(&7));
        assert_eq!(handle.take_native(), Some(7));
        assert!(!handle.is_valid());
        assert_eq!(handle.take_native(), None);

        let empty: DeviceHandle<u8> = DeviceHandle::empty(DeviceId(0), DeviceKind::Joystick);
        assert!(!empty.is_valid());
        assert_eq!(empty.id(), DeviceId(0));
        assert_eq!(empty.kind(), DeviceKind::Joystick);
    }
}
