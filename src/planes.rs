//! Contains the PlaneMapper struct, which describes the relationship
//! between the integral pixel plane with its origin at 0,0 and the
//! region of the complex plane being rendered.  The mapping is fixed
//! by two values: the complex number sitting under pixel (0,0) and the
//! width of one pixel in complex units.
use num::Complex;

/// Maps pixel coordinates to points on the complex plane.  Pixel
/// (0,0) lands exactly on the origin value, and each unit step in x or
/// y advances by one pixel size along the respective axis.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    pix_size: f64,
    origin: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of one pixel in complex units,
    /// which must be strictly positive, and the complex value of pixel
    /// (0,0).
    pub fn new(pix_size: f64, origin: Complex<f64>) -> PlaneMapper {
        assert!(pix_size > 0.0, "pixel size must be positive");
        PlaneMapper { pix_size, origin }
    }

    /// The complex number at pixel (x, y).
    pub fn at(&self, x: usize, y: usize) -> Complex<f64> {
        Complex::new(
            self.origin.re + (x as f64) * self.pix_size,
            self.origin.im + (y as f64) * self.pix_size,
        )
    }
}
