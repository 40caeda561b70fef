extern crate clap;
extern crate env_logger;
extern crate mandelbrot;
extern crate num;

use clap::{App, Arg, ArgMatches};
use num::Complex;
use std::str::FromStr;

use mandelbrot::{parse_threshold, Palette, RenderConfig, Renderer};

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

const THRESHOLD: &str = "threshold";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const ITERATIONS: &str = "iterations";
const PALETTE: &str = "palette";

const DEFAULT_THRESHOLD: f64 = 2.0;

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(THRESHOLD)
                .required(false)
                .index(1)
                .validator(|s| parse_threshold(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Escape threshold for the divergence test (default 2.0)"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("m.ppm")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1500x1500")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,-1.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the viewport"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0,1.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the viewport"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1024")
                .validator(|s| {
                    validate_range(
                        &s,
                        1u64,
                        10_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 10000000",
                    )
                })
                .help("Iteration budget per point"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .required(false)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value("rainbow")
                .possible_values(&["rainbow", "wave"])
                .help("Palette applied to the escape counts"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = args();

    let threshold = match matches.value_of(THRESHOLD) {
        Some(s) => parse_threshold(s).expect("Error parsing escape threshold"),
        None => {
            println!("Using default threshold: {}", DEFAULT_THRESHOLD);
            DEFAULT_THRESHOLD
        }
    };
    let size =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let max_iterations = u64::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Error parsing iteration count");
    let palette = Palette::from_str(matches.value_of(PALETTE).unwrap())
        .expect("Error parsing palette name");
    let output = matches.value_of(OUTPUT).unwrap();

    let config = RenderConfig {
        width: size.0,
        height: size.1,
        leftlower,
        rightupper,
        threshold,
        max_iterations,
        palette,
    };

    let result = Renderer::new(config).and_then(|renderer| {
        let image = renderer.render()?;
        image.dump(output)
    });

    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
