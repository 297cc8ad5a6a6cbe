use std::{fmt, process};

use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};
use once_cell::sync::Lazy;
use regex::Regex;

use shipgrid::{AbilityShape, Board, Coordinate, Orientation, PlaceError, Ship};

/// Matcher for `ROW,COL,ORIENTATION` ship arguments.
static SHIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<row>-?[0-9]+)\s*,\s*(?P<col>-?[0-9]+)\s*(?:,|\s)\s*(?P<dir>[a-z-]+)$")
        .unwrap()
});

/// Matcher for `SHAPE@ROW,COL` ability arguments.
static ABILITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<shape>[a-z]+)\s*@\s*(?P<row>-?[0-9]+)\s*,\s*(?P<col>-?[0-9]+)$").unwrap()
});

fn main() {
    let matches = app().get_matches();
    init_logging(matches.occurrences_of("verbose"));

    let scenario = Scenario::from_matches(&matches);
    let mut board = Board::new();
    if let Err(rejected) = place_fleet(&mut board, &scenario.ships) {
        eprintln!("error: {}", rejected);
        process::exit(1);
    }
    println!();
    println!("{}", board.display());

    apply_abilities(&mut board, &scenario.abilities);
    println!("{}", board.display());
}

/// Build the command line definition.
fn app() -> App<'static, 'static> {
    App::new("Skirmish")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Places ships on a 10x10 board, overlays ability areas and prints the result.")
        .arg(
            Arg::with_name("ship")
                .short("s")
                .long("ship")
                .value_name("ROW,COL,ORIENTATION")
                .help(
                    "place a ship; orientation is one of \"horizontal\" (h), \"vertical\" (v), \
                     \"down-right\" (dr) or \"up-right\" (ur)",
                )
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .allow_hyphen_values(true)
                .validator(|arg| parse_ship(&arg).map(|_| ())),
        )
        .arg(
            Arg::with_name("ability")
                .short("a")
                .long("ability")
                .value_name("SHAPE@ROW,COL")
                .help("overlay an ability; shape is one of \"cone\", \"cross\" or \"diamond\"")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|arg| parse_ability(&arg).map(|_| ())),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("log more detail; repeat for more"),
        )
}

/// Install the logger at a level chosen by the number of `-v` flags.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

/// Request to place a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct ShipOrder {
    origin: Coordinate,
    orientation: Orientation,
}

/// Request to overlay an ability.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct AbilityOrder {
    shape: AbilityShape,
    origin: Coordinate,
}

/// Everything to do in one run, in order.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Scenario {
    ships: Vec<ShipOrder>,
    abilities: Vec<AbilityOrder>,
}

impl Scenario {
    /// The built-in scenario: one ship in each orientation and one of each ability.
    fn demo() -> Self {
        let ship = |row, col, orientation| ShipOrder {
            origin: Coordinate::new(row, col),
            orientation,
        };
        let ability = |shape, row, col| AbilityOrder {
            shape,
            origin: Coordinate::new(row, col),
        };
        Self {
            ships: vec![
                ship(2, 1, Orientation::Horizontal),
                ship(5, 5, Orientation::Vertical),
                ship(0, 7, Orientation::DiagonalDownRight),
                ship(9, 0, Orientation::DiagonalUpRight),
            ],
            abilities: vec![
                ability(AbilityShape::Cone, 3, 3),
                ability(AbilityShape::Cross, 6, 2),
                ability(AbilityShape::Diamond, 4, 7),
            ],
        }
    }

    /// Read the scenario from the command line. Falls back to [`Scenario::demo`] when no
    /// ships or abilities were given.
    fn from_matches(matches: &ArgMatches) -> Self {
        if !matches.is_present("ship") && !matches.is_present("ability") {
            info!("no ships or abilities given, running the demo scenario");
            return Self::demo();
        }
        // Both were already checked by the argument validators.
        let ships = matches
            .values_of("ship")
            .into_iter()
            .flatten()
            .filter_map(|arg| parse_ship(arg).ok())
            .collect();
        let abilities = matches
            .values_of("ability")
            .into_iter()
            .flatten()
            .filter_map(|arg| parse_ability(arg).ok())
            .collect();
        Self { ships, abilities }
    }
}

/// Parse a `ROW,COL,ORIENTATION` ship argument.
fn parse_ship(arg: &str) -> Result<ShipOrder, String> {
    let arg = arg.trim().to_ascii_lowercase();
    let captures = SHIP.captures(&arg).ok_or_else(|| {
        format!(
            "invalid ship \"{}\", expected ROW,COL,ORIENTATION such as 2,1,horizontal",
            arg
        )
    })?;
    let origin = parse_coordinate(&captures["row"], &captures["col"])?;
    let orientation = match &captures["dir"] {
        "horizontal" | "h" => Orientation::Horizontal,
        "vertical" | "v" => Orientation::Vertical,
        "down-right" | "diagonal-down" | "dr" => Orientation::DiagonalDownRight,
        "up-right" | "diagonal-up" | "ur" => Orientation::DiagonalUpRight,
        other => {
            return Err(format!(
                "invalid orientation {}, choose \"horizontal\", \"vertical\", \"down-right\", or \"up-right\"",
                other
            ))
        }
    };
    Ok(ShipOrder {
        origin,
        orientation,
    })
}

/// Parse a `SHAPE@ROW,COL` ability argument.
fn parse_ability(arg: &str) -> Result<AbilityOrder, String> {
    let arg = arg.trim().to_ascii_lowercase();
    let captures = ABILITY.captures(&arg).ok_or_else(|| {
        format!(
            "invalid ability \"{}\", expected SHAPE@ROW,COL such as cross@6,2",
            arg
        )
    })?;
    let shape = match &captures["shape"] {
        "cone" => AbilityShape::Cone,
        "cross" => AbilityShape::Cross,
        "diamond" | "octahedron" => AbilityShape::Diamond,
        other => {
            return Err(format!(
                "invalid shape {}, choose \"cone\", \"cross\", or \"diamond\"",
                other
            ))
        }
    };
    let origin = parse_coordinate(&captures["row"], &captures["col"])?;
    Ok(AbilityOrder { shape, origin })
}

fn parse_coordinate(row: &str, col: &str) -> Result<Coordinate, String> {
    let row = row
        .parse::<isize>()
        .map_err(|_| format!("invalid row: {}", row))?;
    let col = col
        .parse::<isize>()
        .map_err(|_| format!("invalid col: {}", col))?;
    Ok(Coordinate::new(row, col))
}

/// A placement that failed validation, along with its position in the fleet.
#[derive(Debug)]
struct Rejected {
    index: usize,
    error: PlaceError,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ship ({}) rejected at {}: {}",
            Ordinal(self.index + 1),
            self.error.orientation(),
            self.error.origin(),
            self.error.reason(),
        )
    }
}

/// Validate then place each ship in order, stopping at the first that doesn't fit.
fn place_fleet(board: &mut Board, ships: &[ShipOrder]) -> Result<(), Rejected> {
    let ship = Ship::new();
    for (index, order) in ships.iter().enumerate() {
        board
            .check_placement(order.origin, order.orientation)
            .map_err(|error| Rejected { index, error })?;
        board.place(&ship, order.origin, order.orientation);
        info!(
            "placed {} ship {} at {}",
            Ordinal(index + 1),
            order.orientation,
            order.origin
        );
    }
    Ok(())
}

/// Overlay each ability in order.
fn apply_abilities(board: &mut Board, abilities: &[AbilityOrder]) {
    for order in abilities {
        info!("applying {} at {}", order.shape, order.origin);
        board.overlay(&order.shape.mask(), order.origin);
    }
}

/// Display helper that prints a 1-based count as an English ordinal.
struct Ordinal(usize);

impl Ordinal {
    fn suffix(&self) -> &'static str {
        match (self.0 % 10, self.0 % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.0, self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipgrid::{CannotPlaceReason, Cell};

    fn matches(args: &[&str]) -> Scenario {
        let args = std::iter::once("skirmish").chain(args.iter().copied());
        let matches = app().get_matches_from(args);
        Scenario::from_matches(&matches)
    }

    #[test]
    fn parses_ship_arguments() {
        assert_eq!(
            parse_ship("2,1,horizontal"),
            Ok(ShipOrder {
                origin: Coordinate::new(2, 1),
                orientation: Orientation::Horizontal,
            })
        );
        assert_eq!(
            parse_ship(" 9, 0 UR ").map(|order| order.orientation),
            Ok(Orientation::DiagonalUpRight)
        );
        assert_eq!(
            parse_ship("-1,3,dr").map(|order| order.origin),
            Ok(Coordinate::new(-1, 3))
        );
        assert!(parse_ship("2,1").is_err());
        assert!(parse_ship("2,1,sideways").is_err());
        assert!(parse_ship("99999999999999999999999,1,h").is_err());
    }

    #[test]
    fn parses_ability_arguments() {
        assert_eq!(
            parse_ability("Cross@6,2"),
            Ok(AbilityOrder {
                shape: AbilityShape::Cross,
                origin: Coordinate::new(6, 2),
            })
        );
        assert_eq!(
            parse_ability("octahedron @ 4, 7").map(|order| order.shape),
            Ok(AbilityShape::Diamond)
        );
        assert!(parse_ability("beam@1,1").is_err());
        assert!(parse_ability("cone").is_err());
    }

    #[test]
    fn no_arguments_runs_demo() {
        assert_eq!(matches(&[]), Scenario::demo());
    }

    #[test]
    fn arguments_replace_demo() {
        let scenario = matches(&["-s", "0,0,v", "--ship", "-1,1,ur", "-a", "cone@5,5"]);
        assert_eq!(scenario.ships.len(), 2);
        assert_eq!(scenario.ships[1].origin, Coordinate::new(-1, 1));
        assert_eq!(scenario.ships[1].orientation, Orientation::DiagonalUpRight);
        assert_eq!(
            scenario.abilities,
            vec![AbilityOrder {
                shape: AbilityShape::Cone,
                origin: Coordinate::new(5, 5),
            }]
        );
    }

    #[test]
    fn demo_fleet_fits() {
        let scenario = Scenario::demo();
        let mut board = Board::new();
        place_fleet(&mut board, &scenario.ships).unwrap();
        assert_eq!(board.count(Cell::Occupied), 12);
        apply_abilities(&mut board, &scenario.abilities);
        assert_eq!(board.count(Cell::Occupied), 12);
        assert!(board.count(Cell::Affected) > 0);
    }

    #[test]
    fn overlapping_fleet_names_the_failing_ship() {
        let ships = [
            ShipOrder {
                origin: Coordinate::new(2, 1),
                orientation: Orientation::Horizontal,
            },
            ShipOrder {
                origin: Coordinate::new(2, 1),
                orientation: Orientation::Vertical,
            },
        ];
        let mut board = Board::new();
        let rejected = place_fleet(&mut board, &ships).unwrap_err();
        assert_eq!(rejected.index, 1);
        assert_eq!(rejected.error.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(
            rejected.to_string(),
            "2nd ship (vertical) rejected at (2,1): the requested position was already occupied"
        );
    }

    #[test]
    fn ordinals() {
        let text: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111]
            .iter()
            .map(|&n| Ordinal(n).to_string())
            .collect();
        assert_eq!(
            text,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st", "111th"]
        );
    }
}
