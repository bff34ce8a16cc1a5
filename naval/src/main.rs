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
use std::io;

use clap::{App, Arg, ArgMatches, ErrorKind};
use log::LevelFilter;
use once_cell::sync::Lazy;
use regex::Regex;

use navalgrid::{
    render::LEGEND,
    scenario::{self, AbilityOrder},
    Board, Coordinate, ShapeKind, Template, BOARD_SIZE,
};

fn main() -> io::Result<()> {
    let matches = App::new("Naval Grid")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Places ships on a 10x10 grid and stamps ability areas onto it.")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("increase log output, may be repeated"),
        )
        .arg(
            Arg::with_name("ability")
                .short("a")
                .long("ability")
                .value_name("KIND[@ROW,COL]")
                .help("ability to stamp after placing ships: cone, cross, or diamond, optionally at a row and column")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let abilities = match choose_abilities(&matches) {
        Ok(abilities) => abilities,
        Err(msg) => clap::Error::with_description(&msg, ErrorKind::InvalidValue).exit(),
    };

    let mut board = Board::new();

    println!("Placing ships...");
    for report in scenario::place_all(&mut board, &scenario::ships()) {
        println!("{}", report);
    }
    println!();
    show_board(&board);

    for (order, applied) in scenario::apply_all(&mut board, &abilities) {
        println!();
        println!("{} ability centered at {}:", order.kind, order.origin);
        print!("{}", Template::generate(order.kind));
        println!("{} cells affected.", applied);
    }
    if !abilities.is_empty() {
        println!();
        show_board(&board);
    }
    Ok(())
}

/// Configure env_logger, with each `-v` raising the default level by one step.
/// `RUST_LOG` still takes precedence when set.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Print the legend and the board.
fn show_board(board: &Board) {
    println!("Board ({}):", LEGEND);
    print!("{}", board);
}

/// Abilities requested on the command line, or the default run's abilities if none were
/// given.
fn choose_abilities(matches: &ArgMatches) -> Result<Vec<AbilityOrder>, String> {
    match matches.values_of("ability") {
        Some(values) => values.map(parse_ability).collect(),
        None => Ok(scenario::abilities()),
    }
}

/// Parse an ability argument of the form `KIND` or `KIND@ROW,COL`.
fn parse_ability(arg: &str) -> Result<AbilityOrder, String> {
    /// Matcher for ability arguments.
    static ABILITY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?P<kind>[[:alpha:]]+)
        (?:\s*@\s*(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+))?$",
        )
        .unwrap()
    });

    let captures = ABILITY.captures(arg.trim()).ok_or_else(|| {
        format!(
            "invalid ability \"{}\", expected KIND or KIND@ROW,COL",
            arg
        )
    })?;
    let kind = captures["kind"]
        .parse::<ShapeKind>()
        .map_err(|err| err.to_string())?;
    let origin = match (captures.name("row"), captures.name("col")) {
        (Some(row), Some(col)) => Coordinate::new(
            parse_index("row", row.as_str())?,
            parse_index("col", col.as_str())?,
        ),
        _ => scenario::default_origin(kind),
    };
    Ok(AbilityOrder { kind, origin })
}

/// Parse a row or column index, which must be on the board.
fn parse_index(axis: &str, value: &str) -> Result<usize, String> {
    match value.parse() {
        Err(_) => Err(format!("invalid {}: {}", axis, value)),
        Ok(i) if i >= BOARD_SIZE => Err(format!(
            "{} must be in range [0,{}], got {}",
            axis,
            BOARD_SIZE - 1,
            i
        )),
        Ok(i) => Ok(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_with_default_origin() {
        assert_eq!(
            parse_ability("Cross"),
            Ok(AbilityOrder {
                kind: ShapeKind::Cross,
                origin: Coordinate::new(5, 5),
            })
        );
    }

    #[test]
    fn ability_with_origin() {
        assert_eq!(
            parse_ability("diamond@0,9"),
            Ok(AbilityOrder {
                kind: ShapeKind::Diamond,
                origin: Coordinate::new(0, 9),
            })
        );
        assert_eq!(
            parse_ability(" cone @ 3 4 "),
            Ok(AbilityOrder {
                kind: ShapeKind::Cone,
                origin: Coordinate::new(3, 4),
            })
        );
    }

    #[test]
    fn ability_errors() {
        assert!(parse_ability("circle").unwrap_err().contains("invalid ability shape"));
        assert!(parse_ability("cross@5").unwrap_err().contains("expected KIND"));
        assert_eq!(
            parse_ability("cross@10,2"),
            Err("row must be in range [0,9], got 10".to_owned())
        );
        assert_eq!(
            parse_ability("cross@2,99999999999999999999999"),
            Err("invalid col: 99999999999999999999999".to_owned())
        );
    }
}
