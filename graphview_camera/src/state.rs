// Copyright 2026 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pan/zoom/rotation state of a [`Camera`](crate::Camera).
///
/// The state is a plain value: copying it never aliases camera internals, and
/// comparing two states compares all four fields exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Graph‑space X coordinate of the focal point, i.e. the graph‑space
    /// position currently centered in the viewport.
    pub x: f64,
    /// Graph‑space Y coordinate of the focal point.
    pub y: f64,
    /// Viewport rotation in radians. Increasing the angle rotates the
    /// displayed content counter‑clockwise.
    pub angle: f64,
    /// Inverse zoom factor: larger values show more graph‑space content per
    /// pixel (zoom out). Callers should keep this positive; the camera does
    /// not validate it.
    pub ratio: f64,
}

impl CameraState {
    /// Creates a state from its four fields.
    #[must_use]
    pub const fn new(x: f64, y: f64, angle: f64, ratio: f64) -> Self {
        Self { x, y, angle, ratio }
    }

    /// Returns this state with the fields present in `partial` replaced.
    ///
    /// Fields absent from `partial` keep their current value.
    #[must_use]
    pub fn apply(self, partial: PartialCameraState) -> Self {
        Self {
            x: partial.x.unwrap_or(self.x),
            y: partial.y.unwrap_or(self.y),
            angle: partial.angle.unwrap_or(self.angle),
            ratio: partial.ratio.unwrap_or(self.ratio),
        }
    }
}

impl Default for CameraState {
    /// The default camera looks at the center of the nominal `[0, 1]` graph
    /// plane with no zoom and no rotation.
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            angle: 0.0,
            ratio: 1.0,
        }
    }
}

/// A partial [`CameraState`]: the argument type of
/// [`Camera::set_state`](crate::Camera::set_state).
///
/// Only the fields that are `Some` take part in a state update. A full
/// [`CameraState`] converts into a partial with every field set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialCameraState {
    /// New focal point X, if any.
    pub x: Option<f64>,
    /// New focal point Y, if any.
    pub y: Option<f64>,
    /// New rotation angle in radians, if any.
    pub angle: Option<f64>,
    /// New inverse zoom factor, if any.
    pub ratio: Option<f64>,
}

impl PartialCameraState {
    /// Creates an empty partial state that leaves every field unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: None,
            y: None,
            angle: None,
            ratio: None,
        }
    }

    /// Sets the focal point X.
    #[must_use]
    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Sets the focal point Y.
    #[must_use]
    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Sets the rotation angle in radians.
    #[must_use]
    pub const fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Sets the inverse zoom factor.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }
}

impl From<CameraState> for PartialCameraState {
    fn from(state: CameraState) -> Self {
        Self {
            x: Some(state.x),
            y: Some(state.y),
            angle: Some(state.angle),
            ratio: Some(state.ratio),
        }
    }
}
