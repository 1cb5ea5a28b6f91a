//! Loading the player database and the query.

use crate::error::{Result, RosterError};
use crate::model::{Category, Constraints, Player, PlayerPool, Quotas};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Reads players from semicolon-separated records
/// `name;position;price;team;points`, one per line.
///
/// Ingestion is best effort, like the tools that produce these files:
/// loading stops at the first record with an empty name or an unreadable
/// field, keeping everything before it. Records with an unknown position
/// are skipped. Extra trailing fields are ignored.
///
/// # Examples
///
/// ```
/// use u_roster::io::read_players;
///
/// let data = "Courtois;por;9;Real Madrid;120\nPedri;mig;7;Barcelona;95\n";
/// let players = read_players(data.as_bytes()).unwrap();
/// assert_eq!(players.len(), 2);
/// assert_eq!(players[1].score, 95);
/// ```
pub fn read_players<R: Read>(reader: R) -> Result<Vec<Player>> {
    let mut csv = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut players = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match csv.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                warn!(event = "load_stopped", error = %err, "unreadable player record");
                break;
            }
        }
        let line = record.position().map_or(0, |p| p.line() as usize);
        match parse_record(&record) {
            Ok(Some(player)) => players.push(player),
            Ok(None) => {}
            Err(reason) => {
                warn!(event = "load_stopped", line, reason, "stopping at malformed player record");
                break;
            }
        }
    }
    debug!(event = "players_loaded", count = players.len());
    Ok(players)
}

/// `Ok(None)` for a well-formed record of an unknown position.
fn parse_record(record: &StringRecord) -> std::result::Result<Option<Player>, &'static str> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let name = field(0);
    if name.is_empty() {
        return Err("empty name");
    }
    if record.len() < 5 {
        return Err("missing fields");
    }
    let price: u64 = field(2).parse().map_err(|_| "invalid price")?;
    let score: u64 = field(4).parse().map_err(|_| "invalid points")?;

    match field(1).parse::<Category>() {
        Ok(category) => Ok(Some(
            Player::new(name, category, price, score).with_team(field(3)),
        )),
        Err(unknown) => {
            warn!(event = "record_skipped", player = name, error = %unknown);
            Ok(None)
        }
    }
}

/// Loads a [`PlayerPool`] from a player database file.
pub fn load_pool(path: impl AsRef<Path>) -> Result<PlayerPool> {
    let file = File::open(path)?;
    Ok(PlayerPool::new(read_players(file)?))
}

/// Parses a query: five whitespace-separated integers
/// `defenders midfielders strikers total_budget price_cap`.
/// The goalkeeper quota is always 1. Anything after the fifth number is
/// ignored.
///
/// # Examples
///
/// ```
/// use u_roster::io::parse_constraints;
/// use u_roster::model::Category;
///
/// let c = parse_constraints("4 4 2\n300 60\n").unwrap();
/// assert_eq!(c.quota(Category::Defender), 4);
/// assert_eq!(c.total_budget, 300);
/// assert_eq!(c.price_cap, 60);
/// ```
pub fn parse_constraints(text: &str) -> Result<Constraints> {
    const FIELDS: [&str; 5] = ["defenders", "midfielders", "strikers", "total_budget", "price_cap"];

    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));

    let mut values = [(0usize, 0u64); 5];
    for (value, name) in values.iter_mut().zip(FIELDS) {
        let (line, token) = tokens.next().ok_or_else(|| RosterError::Parse {
            line: text.lines().count().max(1),
            message: format!("missing {name}"),
        })?;
        let parsed = token.parse().map_err(|_| RosterError::Parse {
            line,
            message: format!("invalid {name}: {token:?}"),
        })?;
        *value = (line, parsed);
    }

    let [def, mid, att, (_, total_budget), (_, price_cap)] = values;
    let quota = |(line, value): (usize, u64), name: &str| {
        usize::try_from(value).map_err(|_| RosterError::Parse {
            line,
            message: format!("{name} quota {value} does not fit this platform"),
        })
    };
    Ok(Constraints::new(
        Quotas::new(
            quota(def, "defenders")?,
            quota(mid, "midfielders")?,
            quota(att, "strikers")?,
        ),
        total_budget,
        price_cap,
    ))
}

/// Loads [`Constraints`] from a query file.
pub fn load_constraints(path: impl AsRef<Path>) -> Result<Constraints> {
    parse_constraints(&std::fs::read_to_string(path)?)
}
