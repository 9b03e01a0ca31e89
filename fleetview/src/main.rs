// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{fmt, fs, io::Write, path::Path};

use anyhow::{Context, Result};
use clap::{value_t, App, Arg, ArgMatches};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use fleetplace::{
    Cell, CellState, CollisionTest, EdgeRule, Game, Grid, Placer, PlacerConfig, ShipTypes,
    DEFAULT_SHIP_TYPES, GRID_SIZE,
};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let matches = App::new("fleetview")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Randomly places a Battleship fleet and shows the resulting grids.")
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the random number generator for a repeatable layout")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("FILE")
                .help("JSON file mapping ship type names to {length, code, quantity}")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("collision")
                .long("collision")
                .value_name("TEST")
                .help("collision test used while resolving overlaps")
                .takes_value(true)
                .possible_values(&["exact", "bbox", "span"])
                .case_insensitive(true)
                .default_value("exact"),
        )
        .arg(
            Arg::with_name("edges")
                .long("edges")
                .value_name("RULE")
                .help("how close to the far edges ships may be placed")
                .takes_value(true)
                .possible_values(&["strict", "legacy"])
                .case_insensitive(true)
                .default_value("strict"),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .value_name("N")
                .help("give up on a ship after this many nudges")
                .takes_value(true)
                .conflicts_with("unbounded"),
        )
        .arg(
            Arg::with_name("unbounded")
                .long("unbounded")
                .help("keep nudging until every ship fits, however long it takes"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .value_name("FORMAT")
                .help("print the grids as text or the placed ships as JSON")
                .takes_value(true)
                .possible_values(&["text", "json"])
                .case_insensitive(true)
                .default_value("text"),
        )
        .get_matches();

    let ship_types = match matches.value_of("fleet") {
        Some(path) => load_fleet(Path::new(path))?,
        None => (*DEFAULT_SHIP_TYPES).clone(),
    };
    let placer = Placer::new(placer_config(&matches));
    debug!("placing with {:?}", placer.config());

    let game = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("using seed {}", seed);
        Game::new(&mut StdRng::seed_from_u64(seed), &placer, &ship_types)
    } else {
        Game::new(&mut rand::thread_rng(), &placer, &ship_types)
    }
    .context("could not set up the fleet")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match matches.value_of("format") {
        Some(format) if format.eq_ignore_ascii_case("json") => {
            serde_json::to_writer_pretty(&mut out, game.ships())?;
            writeln!(out)?;
        }
        _ => {
            writeln!(out, "Primary Display")?;
            show_board(&mut out, game.primary())?;
            writeln!(out)?;
            writeln!(out, "Tracking Display")?;
            show_board(&mut out, game.tracking())?;
        }
    }
    Ok(())
}

/// Read a fleet configuration file.
fn load_fleet(path: &Path) -> Result<ShipTypes> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read fleet file {}", path.display()))?;
    let types: ShipTypes = serde_json::from_str(&text)
        .with_context(|| format!("could not parse fleet file {}", path.display()))?;
    info!(
        "loaded {} ship types ({} ships) from {}",
        types.len(),
        types.total_ships(),
        path.display()
    );
    Ok(types)
}

/// Build the placer settings from the command line.
fn placer_config(matches: &ArgMatches) -> PlacerConfig {
    let collision = match matches.value_of("collision") {
        Some(test) if test.eq_ignore_ascii_case("bbox") => CollisionTest::BoundingBox,
        Some(test) if test.eq_ignore_ascii_case("span") => CollisionTest::Span,
        _ => CollisionTest::Exact,
    };
    let edges = match matches.value_of("edges") {
        Some(rule) if rule.eq_ignore_ascii_case("legacy") => EdgeRule::Legacy,
        _ => EdgeRule::Strict,
    };
    let max_attempts = if matches.is_present("unbounded") {
        None
    } else if matches.is_present("max_attempts") {
        Some(value_t!(matches, "max_attempts", usize).unwrap_or_else(|e| e.exit()))
    } else {
        PlacerConfig::new().get_max_attempts()
    };
    PlacerConfig::new()
        .collision(collision)
        .edges(edges)
        .max_attempts(max_attempts)
}

/// Display helper for one cell of a grid.
struct CellDisplay(Cell);

impl fmt::Display for CellDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.0.state, self.0.code) {
            (CellState::Empty, _) => f.pad("~~"),
            (CellState::Miss, _) => f.pad("x"),
            (CellState::Ship, Some(code)) => f.pad(&code.to_string()),
            (CellState::Hit, Some(code)) => f.pad(&format!("x{}", code)),
            (CellState::Ship, None) => f.pad("#"),
            (CellState::Hit, None) => f.pad("X"),
        }
    }
}

/// Show the board by printing the grid with row and column headers.
fn show_board(out: &mut impl Write, grid: &Grid) -> std::io::Result<()> {
    write!(out, "   ")?;
    for i in 0..GRID_SIZE {
        write!(out, "{:^4}", i)?;
    }
    writeln!(out)?;
    for (i, row) in grid.iter_rows().enumerate() {
        write!(out, "{:>2} ", i)?;
        for cell in row {
            write!(out, "{:^4}", CellDisplay(*cell))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
