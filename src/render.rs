// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Renders a function's Julia-style escape-time image.
//!
//! The renderer walks every pixel of the target raster, maps it to its
//! point on the complex plane, and asks the orbit iterator whether
//! that point stays bounded.  Bounded points are drawn white, escaped
//! points black.  Every pixel is independent of every other, so a
//! threaded variant splits the raster into bands of rows and hands one
//! band to each crossbeam scoped thread.

extern crate crossbeam;

use itertools::iproduct;
use num::Complex;
use orbit::orbit;
use planes::PlaneMapper;
use poly::Function;

/// Magnitude at which an orbit is considered to have escaped.
pub const ESCAPE_BOUND: f64 = 2.0;

/// Number of iterations tried per pixel before a point is declared
/// bounded.
pub const ITERATION_LIMIT: usize = 500;

/// The two intensities a rendered pixel can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shade {
    /// The pixel's orbit escaped the bound.
    Black,
    /// The pixel's orbit stayed bounded for the whole budget.
    White,
}

/// A finished two-tone image, row-major with pixel (0,0) first.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Shade>,
}

impl Raster {
    fn new(width: usize, height: usize) -> Raster {
        Raster {
            width,
            height,
            pixels: vec![Shade::Black; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The shade of pixel (x, y).
    pub fn get(&self, x: usize, y: usize) -> Shade {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// The whole image, row-major.
    pub fn pixels(&self) -> &[Shade] {
        &self.pixels
    }

    /// The image as 8-bit grayscale samples, ready for an encoder.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|p| match p {
                Shade::Black => 0,
                Shade::White => 255,
            })
            .collect()
    }
}

fn classify<F: Function + ?Sized>(f: &F, z: Complex<f64>) -> Shade {
    match orbit(f, z, ESCAPE_BOUND, ITERATION_LIMIT) {
        None => Shade::White,
        Some(_) => Shade::Black,
    }
}

// The raster covers [re_from, re_to] x [im_from, im_to] at pix_size
// units per pixel, rounding the resolution down.  A caller handing us
// an inverted rectangle or a degenerate pixel size has a bug, and we
// say so at once.
fn resolution(re_from: f64, re_to: f64, im_from: f64, im_to: f64, pix_size: f64) -> (usize, usize) {
    let width = re_to - re_from;
    let height = im_to - im_from;
    assert!(width >= 0.0, "negative width");
    assert!(height >= 0.0, "negative height");
    assert!(pix_size > 0.0, "pixel size must be positive");

    ((width / pix_size) as usize, (height / pix_size) as usize)
}

/// Renders the escape-time image of f over the rectangle
/// [re_from, re_to] x [im_from, im_to], one pixel per pix_size-sized
/// cell.  Pixel (0,0) corresponds to the complex point
/// (re_from, im_from).
pub fn draw<F: Function>(
    f: &F,
    re_from: f64,
    re_to: f64,
    im_from: f64,
    im_to: f64,
    pix_size: f64,
) -> Raster {
    let (resx, resy) = resolution(re_from, re_to, im_from, im_to, pix_size);
    let plane = PlaneMapper::new(pix_size, Complex::new(re_from, im_from));

    let mut raster = Raster::new(resx, resy);
    for (y, x) in iproduct!(0..resy, 0..resx) {
        raster.pixels[y * resx + x] = classify(f, plane.at(x, y));
    }
    raster
}

/// A multi-threaded version of the render function that takes a
/// thread count as an option.  Produces exactly the same raster as
/// `draw`.
pub fn draw_threaded<F: Function + Sync>(
    f: &F,
    re_from: f64,
    re_to: f64,
    im_from: f64,
    im_to: f64,
    pix_size: f64,
    threads: usize,
) -> Raster {
    assert!(threads > 0, "thread count must be positive");

    let (resx, resy) = resolution(re_from, re_to, im_from, im_to, pix_size);
    let plane = PlaneMapper::new(pix_size, Complex::new(re_from, im_from));

    let mut raster = Raster::new(resx, resy);
    if raster.pixels.is_empty() {
        return raster;
    }

    let band_rows = resy / threads + 1;
    {
        let bands: Vec<(usize, &mut [Shade])> = raster
            .pixels
            .chunks_mut(band_rows * resx)
            .enumerate()
            .collect();
        crossbeam::scope(|spawner| {
            for (band, cells) in bands {
                let first_row = band * band_rows;
                spawner.spawn(move |_| {
                    for (i, cell) in cells.iter_mut().enumerate() {
                        let x = i % resx;
                        let y = first_row + i / resx;
                        *cell = classify(f, plane.at(x, y));
                    }
                });
            }
        })
        .unwrap();
    }
    raster
}
