//! Parsing command-line arguments.

use crate::{patterns, tui::view};
use clap::{App, Arg};
use rand::Rng;
use std::{thread, time::Duration};
use torlife_lib::{Coord, Error, Simulation};

fn is_positive(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit()) && s != "0" && !s.starts_with('-')
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let mut parts = s.splitn(2, ',');
    let row = parts.next().and_then(|p| p.trim().parse().ok());
    let col = parts.next().and_then(|p| p.trim().parse().ok());
    match (row, col) {
        (Some(row), Some(col)) => Ok((row, col)),
        _ => Err(String::from("cells must be given as ROW,COL")),
    }
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) sim: Simulation,
    pub(crate) generations: u64,
    pub(crate) delay: Duration,
    pub(crate) no_tui: bool,
}

/// Parses the command-line arguments and seeds the simulation.
pub(crate) fn parse_args() -> Result<Args, Error> {
    let matches = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            "Simulating Conway's Game of Life on a toroidal grid\n\
             \n\
             The grid edges wrap around, so a glider leaving one side\n\
             re-enters on the opposite side.\n\
             \n\
             The grid is displayed in Plaintext format:\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n\
             \n\
             Without --pattern, --cell or --random, a glider is seeded\n\
             in the top-left corner.\n",
        )
        .arg(
            Arg::with_name("ROWS")
                .help("Number of rows in the grid")
                .required(true)
                .index(1)
                .validator(|r| {
                    if is_positive(&r) {
                        Ok(())
                    } else {
                        Err(String::from("rows must be a positive integer"))
                    }
                }),
        )
        .arg(
            Arg::with_name("COLS")
                .help("Number of columns in the grid")
                .required(true)
                .index(2)
                .validator(|c| {
                    if is_positive(&c) {
                        Ok(())
                    } else {
                        Err(String::from("columns must be a positive integer"))
                    }
                }),
        )
        .arg(
            Arg::with_name("GENS")
                .help("Number of generations to run")
                .default_value("100")
                .index(3)
                .validator(|g| {
                    if is_positive(&g) {
                        Ok(())
                    } else {
                        Err(String::from("generations must be a positive integer"))
                    }
                }),
        )
        .arg(
            Arg::with_name("PATTERN")
                .help("Seeds the grid with a named pattern")
                .long_help(
                    "Seeds the grid with a named pattern\n\
                     The pattern is anchored at the top-left corner;\n\
                     combine with --cell to add further live cells.\n",
                )
                .short("p")
                .long("pattern")
                .possible_values(&patterns::NAMES)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("CELL")
                .help("Seeds an individual cell, given as ROW,COL")
                .short("c")
                .long("cell")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| parse_cell(&s).map(|_| ())),
        )
        .arg(
            Arg::with_name("RANDOM")
                .help("Seeds a random soup with the given live-cell density")
                .short("r")
                .long("random")
                .takes_value(true)
                .validator(|d| match d.parse::<f64>() {
                    Ok(d) if (0.0..=1.0).contains(&d) => Ok(()),
                    _ => Err(String::from("density must be a number between 0 and 1")),
                }),
        )
        .arg(
            Arg::with_name("DELAY")
                .help("Delay between generations in milliseconds")
                .short("d")
                .long("delay")
                .default_value("100")
                .takes_value(true)
                .validator(|d| d.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("NOTUI")
                .help("Prints each generation to stdout instead of entering the TUI")
                .short("n")
                .long("no-tui"),
        )
        .get_matches();

    let rows = matches.value_of("ROWS").unwrap().parse().unwrap();
    let cols = matches.value_of("COLS").unwrap().parse().unwrap();
    let generations = matches.value_of("GENS").unwrap().parse().unwrap();
    let delay = Duration::from_millis(matches.value_of("DELAY").unwrap().parse().unwrap());
    let no_tui = matches.is_present("NOTUI");

    let mut sim = Simulation::new(rows, cols)?;

    let mut seed = Vec::new();
    if let Some(name) = matches.value_of("PATTERN") {
        seed.extend(patterns::by_name(name).unwrap());
    }
    if let Some(cells) = matches.values_of("CELL") {
        for cell in cells {
            let (row, col) = parse_cell(cell).unwrap();
            seed.push(Coord::new(row, col));
        }
    }
    if let Some(density) = matches.value_of("RANDOM") {
        let density = density.parse().unwrap();
        let mut rng = rand::thread_rng();
        for row in 0..rows {
            for col in 0..cols {
                if rng.gen_bool(density) {
                    seed.push(Coord::new(row, col));
                }
            }
        }
    }
    if seed.is_empty() {
        seed = patterns::by_name("glider").unwrap();
    }
    sim.seed(&seed)?;

    Ok(Args {
        sim,
        generations,
        delay,
        no_tui,
    })
}

/// Runs the simulation, either in the TUI or as a plain stdout dump.
pub(crate) fn run(args: Args) {
    if args.no_tui {
        print_generations(args)
    } else {
        view(args)
    }
}

/// Prints every generation to stdout, pacing with the configured delay.
fn print_generations(mut args: Args) {
    println!("{}", args.sim.grid());
    for _ in 0..args.generations {
        args.sim.step();
        println!("{}", args.sim.grid());
        thread::sleep(args.delay);
    }
}
