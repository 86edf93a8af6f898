// Copyright 2026 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::state::{CameraState, PartialCameraState};

/// 2D camera over the graph‑space plane.
///
/// `Camera` owns a [`CameraState`] (pan + zoom + rotation), remembers the
/// state from before the most recent accepted mutation, and derives the
/// affine transform mapping graph coordinates onto a pixel viewport of the
/// dimensions supplied per call. It can be used to:
/// - Convert points and rectangles between graph and viewport coordinates.
/// - Track state transitions for animation/interpolation consumers.
/// - Temporarily freeze the camera against external mutation.
#[derive(Clone, Debug)]
pub struct Camera {
    current_state: CameraState,
    previous_state: CameraState,
    enabled: bool,
}

impl Camera {
    /// Creates a camera in the default state (focal point `(0.5, 0.5)`, no
    /// zoom, no rotation), enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(CameraState::default())
    }

    /// Creates an enabled camera starting from the given state.
    ///
    /// The previous state starts out equal to `state`.
    #[must_use]
    pub fn with_state(state: CameraState) -> Self {
        Self {
            current_state: state,
            previous_state: state,
            enabled: true,
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.current_state
    }

    /// Returns a copy of the state from before the most recent accepted
    /// mutation.
    ///
    /// Rejected mutations (while the camera is disabled) do not affect it.
    #[must_use]
    pub fn previous_state(&self) -> CameraState {
        self.previous_state
    }

    /// Returns `true` if the current state equals `state` field for field.
    #[must_use]
    pub fn has_state(&self, state: CameraState) -> bool {
        self.current_state == state
    }

    /// Allows `set_state`/`update_state` to mutate the camera again.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Makes `set_state`/`update_state` silent no‑ops until re‑enabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Returns `true` if the camera currently accepts mutations.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Merges `partial` over the current state.
    ///
    /// Fields absent from `partial` keep their current value. The state from
    /// before the merge becomes the new previous state. While the camera is
    /// disabled the call has no observable effect at all.
    ///
    /// No validation or clamping is performed on the supplied values.
    pub fn set_state(&mut self, partial: impl Into<PartialCameraState>) {
        if !self.enabled {
            return;
        }
        self.previous_state = self.current_state;
        self.current_state = self.current_state.apply(partial.into());
    }

    /// Computes a partial state from the current state and applies it.
    ///
    /// Goes through the same gate and history path as [`Self::set_state`];
    /// while the camera is disabled, `updater` is not even invoked.
    pub fn update_state(&mut self, updater: impl FnOnce(CameraState) -> PartialCameraState) {
        if !self.enabled {
            return;
        }
        let partial = updater(self.current_state);
        self.set_state(partial);
    }

    /// Returns the affine mapping graph coordinates onto a viewport of the
    /// given pixel dimensions under the current state.
    ///
    /// Renderers that consume a matrix directly can use this instead of
    /// converting points one by one. The mapping reads right to left:
    /// translate the focal point to the origin, scale by
    /// `min(width, height) / ratio` while flipping Y (graph space is y‑up,
    /// viewport space y‑down), rotate by `angle`, then translate to the
    /// viewport center.
    #[must_use]
    pub fn graph_to_viewport_transform(&self, dimensions: Size) -> Affine {
        let state = self.current_state;
        let scale = dimensions.min_side() / state.ratio;
        Affine::translate(Vec2::new(dimensions.width * 0.5, dimensions.height * 0.5))
            * Affine::rotate(state.angle)
            * Affine::scale_non_uniform(scale, -scale)
            * Affine::translate(Vec2::new(-state.x, -state.y))
    }

    /// Converts a graph‑space point into viewport pixel coordinates.
    #[must_use]
    pub fn graph_to_viewport(&self, dimensions: Size, point: Point) -> Point {
        self.graph_to_viewport_transform(dimensions) * point
    }

    /// Converts a viewport pixel position into graph‑space coordinates.
    ///
    /// This is the exact algebraic inverse of [`Self::graph_to_viewport`]:
    /// for any state and any dimensions with a positive smaller side and a
    /// non‑zero ratio, converting a point there and back reproduces it up to
    /// floating‑point rounding.
    #[must_use]
    pub fn viewport_to_graph(&self, dimensions: Size, point: Point) -> Point {
        self.graph_to_viewport_transform(dimensions).inverse() * point
    }

    /// Converts a graph‑space rectangle into its viewport‑space bounding box.
    #[must_use]
    pub fn graph_to_viewport_rect(&self, dimensions: Size, rect: Rect) -> Rect {
        map_rect(self.graph_to_viewport_transform(dimensions), rect)
    }

    /// Converts a viewport‑space rectangle into its graph‑space bounding box.
    #[must_use]
    pub fn viewport_to_graph_rect(&self, dimensions: Size, rect: Rect) -> Rect {
        map_rect(self.graph_to_viewport_transform(dimensions).inverse(), rect)
    }

    /// Returns how many graph units one pixel covers under the current state,
    /// for a viewport of the given dimensions.
    ///
    /// This is `ratio / min(width, height)` and can be used to pick stroke
    /// widths or label sizes in graph units.
    #[must_use]
    pub fn graph_units_per_pixel(&self, dimensions: Size) -> f64 {
        self.current_state.ratio / dimensions.min_side()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CameraState> for Camera {
    fn from(state: CameraState) -> Self {
        Self::with_state(state)
    }
}

/// Transforms the four corners of `rect` and takes their bounding box.
///
/// With rotation in play the image of an axis‑aligned rectangle is not
/// axis‑aligned, so mapping only two corners would under‑cover it.
fn map_rect(transform: Affine, rect: Rect) -> Rect {
    let q0 = transform * rect.origin();
    let q1 = transform * Point::new(rect.max_x(), rect.y0);
    let q2 = transform * Point::new(rect.x0, rect.max_y());
    let q3 = transform * Point::new(rect.max_x(), rect.max_y());
    let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
    let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
    let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
    let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
