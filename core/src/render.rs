//! Turning 3D boxes into ordered, shaded 2D polygons.
//!
//! This module constitutes the projection and shading pipeline of
//! `lumibox`. A [camera][cam] transforms model-space geometry to the
//! screen, a [light][light] determines the brightness of each face, and
//! the [shader][shade] depth-sorts the resulting polygons so that drawing
//! them in order paints far faces before near ones. The [svg] module
//! formats the result for a vector drawing surface.

pub use crate::math::mat::Proj;

pub mod cam;
pub mod light;
pub mod shade;
pub mod svg;

/// Model space coordinate basis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Model;

/// World space coordinate basis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct World;

/// View (camera) space coordinate basis.
///
/// The camera looks down the positive z axis, with y up and x right.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct View;

/// NDC space coordinate basis (normalized device coordinates).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Ndc;

/// Screen space coordinate basis. The origin is the top left corner and
/// y grows downward.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Screen;
