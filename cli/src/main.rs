extern crate clap;
extern crate polytrace;

mod classify;
mod commands;
mod resolve;
mod segment;

use clap::*;
use commands::*;

use polytrace::svg::Color;
use polytrace::topology::layer::LayerOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::{stderr, stdout, Write};
use std::process::exit;

fn main() {
    env_logger::init();

    let matches = App::new("Polytrace command-line interface")
        .version("0.1")
        .about("Contour topology resolver for traced color layers")
        .subcommand(
            SubCommand::with_name("resolve")
                .about("Resolves a layer's topology and writes an SVG document")
                .arg(
                    Arg::with_name("FILL")
                        .short("f")
                        .long("fill")
                        .help("Fill color of the layer (#rgb or #rrggbb, black by default)")
                        .value_name("COLOR")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("BACKGROUND")
                        .short("b")
                        .long("background")
                        .help("Adds a background rect with the given color")
                        .value_name("COLOR")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("WIDTH")
                        .short("w")
                        .long("width")
                        .help("Canvas width in pixels")
                        .value_name("WIDTH")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("HEIGHT")
                        .long("height")
                        .help("Canvas height in pixels")
                        .value_name("HEIGHT")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("EXPANSION")
                        .short("e")
                        .long("expansion")
                        .help("Grows each outline by this fraction of its size (0 by default)")
                        .value_name("EXPANSION")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("TOLERANCE")
                        .short("t")
                        .long("tolerance")
                        .help("Sets the curve flattening tolerance (0.1 by default)")
                        .value_name("TOLERANCE")
                        .takes_value(true),
                ),
        )
        .subcommand(SubCommand::with_name("segment").about("Lists the subpaths of a composite path"))
        .subcommand(
            SubCommand::with_name("classify")
                .about("Classifies each subpath as a host or a hole")
                .arg(
                    Arg::with_name("TOLERANCE")
                        .short("t")
                        .long("tolerance")
                        .help("Sets the curve flattening tolerance (0.1 by default)")
                        .value_name("TOLERANCE")
                        .takes_value(true),
                ),
        )
        .arg(
            Arg::with_name("PATH")
                .value_name("PATH")
                .help("SVG path data of one traced color layer")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Reads the path data from a file")
                .short("i")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Writes the result to a file instead of stdout")
                .short("o")
                .long("output")
                .value_name("FILE")
                .takes_value(true)
                .required(false),
        )
        .get_matches();

    let mut input_buffer = matches.value_of("PATH").unwrap_or("").to_string();

    if let Some(input_file) = matches.value_of("INPUT") {
        if let Ok(mut file) = File::open(input_file) {
            if file.read_to_string(&mut input_buffer).is_err() {
                let _ = writeln!(&mut stderr(), "Cannot read file {}", input_file);
                exit(1);
            }
        } else {
            let _ = writeln!(&mut stderr(), "Cannot open file {}", input_file);
            exit(1);
        }
    }

    let mut output: Box<dyn Write> = Box::new(stdout());

    if let Some(output_file) = matches.value_of("OUTPUT") {
        if let Ok(file) = File::create(output_file) {
            output = Box::new(file);
        }
    }

    let result = if let Some(resolve_matches) = matches.subcommand_matches("resolve") {
        let cmd = ResolveCmd {
            input: input_buffer,
            output,
            fill: get_color(resolve_matches, "FILL").unwrap_or(Color::BLACK),
            background: get_color(resolve_matches, "BACKGROUND"),
            width: get_f32(resolve_matches, "WIDTH", 100.0),
            height: get_f32(resolve_matches, "HEIGHT", 100.0),
            options: LayerOptions {
                expansion: get_f32(resolve_matches, "EXPANSION", 0.0),
                tolerance: get_tolerance(resolve_matches),
            },
        };

        resolve::resolve(cmd)
    } else if matches.subcommand_matches("segment").is_some() {
        segment::segment(SegmentCmd {
            input: input_buffer,
            output,
        })
    } else if let Some(classify_matches) = matches.subcommand_matches("classify") {
        classify::classify(ClassifyCmd {
            input: input_buffer,
            output,
            tolerance: get_tolerance(classify_matches),
        })
    } else {
        Ok(())
    };

    if let Err(e) = result {
        let _ = writeln!(&mut stderr(), "{}", e);
        exit(1);
    }
}

fn get_tolerance(matches: &ArgMatches) -> f32 {
    get_f32(matches, "TOLERANCE", 0.1)
}

fn get_f32(matches: &ArgMatches, name: &str, default: f32) -> f32 {
    match matches.value_of(name) {
        Some(value) => value.parse().unwrap_or(default),
        None => default,
    }
}

fn get_color(matches: &ArgMatches, name: &str) -> Option<Color> {
    let value = matches.value_of(name)?;
    match value.parse() {
        Ok(color) => Some(color),
        Err(e) => {
            let _ = writeln!(&mut stderr(), "{}", e);
            exit(1);
        }
    }
}
