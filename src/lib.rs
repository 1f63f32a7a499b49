#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is the boundary between the points of the complex
//! plane whose orbit under a fixed function stays bounded and the
//! points whose orbit escapes to infinity.  This crate renders
//! escape-time images of such sets for any polynomial or rational
//! function: each pixel of the target raster is mapped to its point
//! on the complex plane, the function is iterated from that point,
//! and the pixel is painted white if the orbit never reaches the
//! escape bound within the iteration budget, black if it does.
//!
//! The pieces compose from the bottom up: `poly` supplies the algebra
//! of evaluatable functions, `orbit` the escape-time test, `planes`
//! the pixel-to-plane mapping, and `render` the loop that turns all
//! three into a finished two-tone raster.

extern crate crossbeam;
extern crate itertools;
extern crate num;

pub mod orbit;
pub mod planes;
pub mod poly;
pub mod render;

pub use orbit::orbit;
pub use planes::PlaneMapper;
pub use poly::{Function, Poly, Rational};
pub use render::{draw, draw_threaded, Raster, Shade, ESCAPE_BOUND, ITERATION_LIMIT};
