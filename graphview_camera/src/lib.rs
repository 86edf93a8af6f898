// Copyright 2026 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphview Camera: a headless 2D camera for graph rendering.
//!
//! This crate provides a small model of a camera looking at "graph space", the
//! logical, resolution‑independent plane in which a graph layout is authored
//! (nominally spanning roughly `[0, 1]` on each axis). It focuses on:
//! - Camera state (pan + zoom + rotation) with one step of history.
//! - Exact, invertible coordinate conversion between graph space and the
//!   viewport's pixel space.
//! - An enable/disable gate that silently rejects external mutation.
//!
//! It does **not** own any graph data, rendering backend, or input handling.
//! Callers are expected to:
//! - Drive the camera from their own input layer (pan/zoom/rotate gestures),
//!   typically converting pointer positions with
//!   [`Camera::viewport_to_graph`] before computing a new state.
//! - Read [`Camera::state`] and [`Camera::previous_state`] each frame, for
//!   example to interpolate smooth transitions.
//! - Use [`Camera::graph_to_viewport`] (or the raw
//!   [`Camera::graph_to_viewport_transform`] affine) to place visual elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use graphview_camera::{Camera, PartialCameraState};
//! use kurbo::{Point, Size};
//!
//! let mut camera = Camera::new();
//!
//! // Pan right and zoom in; unspecified fields keep their current values.
//! camera.set_state(PartialCameraState::new().with_x(1.0).with_ratio(0.5));
//!
//! // Place a graph-space point on a 200x100 viewport.
//! let dimensions = Size::new(200.0, 100.0);
//! let view_pt = camera.graph_to_viewport(dimensions, Point::new(0.75, 0.75));
//!
//! // Convert a pointer position back into graph space (for hit testing, etc.).
//! let graph_pt = camera.viewport_to_graph(dimensions, view_pt);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is **isotropic**: the pixel scale is derived from the smaller
//!   viewport extent, so rotation stays angle‑preserving regardless of the
//!   viewport's aspect ratio.
//! - Graph space is y‑up, viewport space is y‑down (origin top‑left); the
//!   conversion flips the Y axis.
//! - The camera performs no validation of state values. A zero `ratio` or
//!   non‑finite fields propagate through the arithmetic as non‑finite
//!   results rather than raising a fault; keeping `ratio` positive is the
//!   caller's responsibility.
//! - The camera is a plain owned mutable value with no internal
//!   synchronization; each rendering context should own exactly one instance
//!   and serialize its own mutations.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod state;

pub use camera::Camera;
pub use state::{CameraState, PartialCameraState};
