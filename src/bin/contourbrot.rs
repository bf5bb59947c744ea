extern crate clap;
extern crate contourbrot;
extern crate env_logger;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use contourbrot::{Config, Error};
use num::Complex;
use std::str::FromStr;
use std::time::Duration;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
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

const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const ITERATIONS: &str = "iterations";
const FRAMES: &str = "frames";
const INTERVAL: &str = "interval";
const ELEVATION: &str = "elevation";
const LEVELS: &str = "levels";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("contourbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Rotating 3D contour view of Mandelbrot escape times")
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("400x400")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse grid size"))
                .help("Samples along the real and imaginary axes"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,-2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the sampled region"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2.0,2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the sampled region"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("50")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 0 and 100000",
                    )
                })
                .help("Iteration limit, and the height of the vertical axis"),
        )
        .arg(
            Arg::with_name(FRAMES)
                .required(false)
                .long(FRAMES)
                .short("f")
                .takes_value(true)
                .default_value("60")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        3600,
                        "Could not parse frame count",
                        "Frame count must be between 1 and 3600",
                    )
                })
                .help("Frames in one full turn of the camera"),
        )
        .arg(
            Arg::with_name(INTERVAL)
                .required(false)
                .long(INTERVAL)
                .takes_value(true)
                .default_value("50")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        10_000,
                        "Could not parse frame interval",
                        "Frame interval must be between 1 and 10000 milliseconds",
                    )
                })
                .help("Milliseconds between frames"),
        )
        .arg(
            Arg::with_name(ELEVATION)
                .required(false)
                .long(ELEVATION)
                .short("e")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("30")
                .validator(|s| {
                    validate_range(
                        &s,
                        -90.0,
                        90.0,
                        "Could not parse camera elevation",
                        "Camera elevation must be between -90 and 90 degrees",
                    )
                })
                .help("Camera elevation in degrees"),
        )
        .arg(
            Arg::with_name(LEVELS)
                .required(false)
                .long(LEVELS)
                .takes_value(true)
                .default_value("50")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1000,
                        "Could not parse contour level count",
                        "Contour level count must be between 1 and 1000",
                    )
                })
                .help("Number of contour levels"),
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
                .help("Number of threads used to compute the escape field"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, Error> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| Error::Config(format!("Could not parse {}", name)))
}

fn config(matches: &ArgMatches) -> Result<Config, Error> {
    let size = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u16>(s, 'x'))
        .ok_or_else(|| Error::Config("Could not parse grid size".to_string()))?;
    let leftlower = matches
        .value_of(LEFTLOWER)
        .and_then(parse_complex)
        .ok_or_else(|| Error::Config("Could not parse left lower corner".to_string()))?;
    let rightupper = matches
        .value_of(RIGHTUPPER)
        .and_then(parse_complex)
        .ok_or_else(|| Error::Config("Could not parse right upper corner".to_string()))?;

    Ok(Config {
        width: usize::from(size.0),
        height: usize::from(size.1),
        leftlower,
        rightupper,
        max_iterations: value(matches, ITERATIONS)?,
        frames: value(matches, FRAMES)?,
        interval: Duration::from_millis(value(matches, INTERVAL)?),
        elevation: value(matches, ELEVATION)?,
        levels: value(matches, LEVELS)?,
        threads: value(matches, THREADS)?,
        ..Config::default()
    })
}

fn main() {
    env_logger::init();
    let matches = args();
    let result = config(&matches).and_then(contourbrot::run);
    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
