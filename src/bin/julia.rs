extern crate clap;
extern crate failure;
extern crate image;
extern crate julia;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::png::PNGEncoder;
use image::ColorType;
use julia::{draw, draw_threaded, Poly, Raster};
use num::Complex;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

fn validate_float(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const REAL: &str = "real";
const IMAG: &str = "imag";
const SIZE: &str = "size";
const OUT: &str = "out";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("julia")
        .version("0.1.0")
        .about("Quadratic Julia set renderer")
        .arg(
            Arg::with_name(REAL)
                .required(false)
                .long(REAL)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.0")
                .validator(|s| validate_float(&s, "Could not parse real part"))
                .help("Real part of the constant whose Julia set to plot"),
        )
        .arg(
            Arg::with_name(IMAG)
                .required(false)
                .long(IMAG)
                .short("i")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.0")
                .validator(|s| validate_float(&s, "Could not parse imaginary part"))
                .help("Imaginary part of the constant whose Julia set to plot"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("4000")
                .validator(|s| {
                    validate_range(
                        &s,
                        16,
                        20_000,
                        "Could not parse image size",
                        "Image size must be between 16 and 20000",
                    )
                })
                .help("Size in pixels to draw the fractal at"),
        )
        .arg(
            Arg::with_name(OUT)
                .required(false)
                .long(OUT)
                .short("o")
                .takes_value(true)
                .default_value("julia.png")
                .help("Filename to save output to"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with"),
        )
        .get_matches()
}

fn write_image(outfile: &str, raster: &Raster) -> Result<(), failure::Error> {
    let output = File::create(Path::new(outfile))?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        &raster.to_bytes(),
        raster.width() as u32,
        raster.height() as u32,
        ColorType::Gray(8),
    )?;
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    // The validators already vetted every value.
    let re = f64::from_str(matches.value_of(REAL).unwrap()).unwrap();
    let im = f64::from_str(matches.value_of(IMAG).unwrap()).unwrap();
    let size = usize::from_str(matches.value_of(SIZE).unwrap()).unwrap();
    let threads = usize::from_str(matches.value_of(THREADS).unwrap()).unwrap();
    let out = matches.value_of(OUT).unwrap();

    // The quadratic map z^2 + c over the square [-2, 2] x [-2i, 2i].
    let f = Poly::new(vec![
        Complex::new(re, im),
        Complex::new(0.0, 0.0),
        Complex::new(1.0, 0.0),
    ]);
    let pix_size = 4.0 / (size as f64);

    let raster = if threads > 1 {
        draw_threaded(&f, -2.0, 2.0, -2.0, 2.0, pix_size, threads)
    } else {
        draw(&f, -2.0, 2.0, -2.0, 2.0, pix_size)
    };

    write_image(out, &raster)
}

fn main() {
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("julia: {}", e);
        std::process::exit(1);
    }
}
