//! Event-log parsing.
//!
//! A scenario file is a sequence of whitespace-separated records, one per
//! line:
//!
//! ```text
//! <tick> Arrive <customer> [<item-name> <item-time>]...
//! <tick> Close <lane>
//! ```
//!
//! Parsing is the boundary where malformed input is caught; the engine core
//! assumes every event it receives is well-formed and in range.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

use kassa_core::prelude::{Customer, Event, Item, Store};

/// Malformed-input errors surfaced while reading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("line {line}: empty event record")]
    EmptyRecord { line: usize },

    #[error("line {line}: unknown event kind '{kind}'")]
    UnknownEventKind { line: usize, kind: String },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid integer '{token}'")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: item '{item}' has no service time")]
    DanglingItem { line: usize, item: String },

    #[error("line {line}: lane {lane} out of range (store has {lanes} lanes)")]
    LaneOutOfRange {
        line: usize,
        lane: usize,
        lanes: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads the event log at `path` into seed events for `store`.
pub fn load_events<P: AsRef<Path>>(path: P, store: &Store) -> Result<Vec<Event>, ScenarioError> {
    let file = File::open(path)?;
    parse_events(BufReader::new(file), store)
}

/// Parses an event log from any buffered reader.
pub fn parse_events<R: BufRead>(reader: R, store: &Store) -> Result<Vec<Event>, ScenarioError> {
    let mut events = Vec::new();
    for (index, record) in reader.lines().enumerate() {
        let line = index + 1;
        let record = record?;
        let mut tokens = record.split_whitespace();

        let tick_token = tokens.next().ok_or(ScenarioError::EmptyRecord { line })?;
        let timestamp = parse_number(tick_token, line)?;

        let kind = tokens.next().ok_or(ScenarioError::MissingField {
            line,
            field: "event kind",
        })?;

        match kind {
            "Arrive" => {
                let name = tokens.next().ok_or(ScenarioError::MissingField {
                    line,
                    field: "customer name",
                })?;
                let mut items = Vec::new();
                while let Some(item_name) = tokens.next() {
                    let time_token = tokens.next().ok_or_else(|| ScenarioError::DanglingItem {
                        line,
                        item: item_name.to_owned(),
                    })?;
                    items.push(Item::new(item_name, parse_number(time_token, line)?));
                }
                events.push(Event::CustomerArrival {
                    timestamp,
                    customer: Customer::new(name, items),
                });
            }
            "Close" => {
                let lane_token = tokens.next().ok_or(ScenarioError::MissingField {
                    line,
                    field: "lane index",
                })?;
                let lane = parse_number(lane_token, line)? as usize;
                if !store.contains_lane(lane) {
                    return Err(ScenarioError::LaneOutOfRange {
                        line,
                        lane,
                        lanes: store.lane_count(),
                    });
                }
                events.push(Event::CloseLine { timestamp, lane });
            }
            other => {
                return Err(ScenarioError::UnknownEventKind {
                    line,
                    kind: other.to_owned(),
                })
            }
        }
    }
    Ok(events)
}

fn parse_number(token: &str, line: usize) -> Result<u64, ScenarioError> {
    token.parse().map_err(|source| ScenarioError::InvalidNumber {
        line,
        token: token.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kassa_core::prelude::StoreLayout;
    use std::io::Cursor;

    fn store() -> Store {
        Store::new(StoreLayout {
            regular_count: 2,
            express_count: 0,
            self_serve_count: 0,
            line_capacity: 4,
        })
    }

    fn parse(input: &str) -> Result<Vec<Event>, ScenarioError> {
        parse_events(Cursor::new(input), &store())
    }

    #[test]
    fn parses_arrivals_with_items() {
        let events = parse("0 Arrive Ann apple 3 milk 2\n").unwrap();
        match &events[..] {
            [Event::CustomerArrival {
                timestamp,
                customer,
            }] => {
                assert_eq!(*timestamp, 0);
                assert_eq!(customer.name(), "Ann");
                assert_eq!(customer.item_count(), 2);
                assert_eq!(customer.total_item_time(), 5);
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn parses_arrival_without_items() {
        let events = parse("4 Arrive Bob\n").unwrap();
        match &events[..] {
            [Event::CustomerArrival { customer, .. }] => {
                assert_eq!(customer.item_count(), 0);
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn parses_close_records() {
        let events = parse("7 Close 1\n").unwrap();
        assert!(matches!(
            &events[..],
            [Event::CloseLine {
                timestamp: 7,
                lane: 1
            }]
        ));
    }

    #[test]
    fn preserves_record_order() {
        let events = parse("5 Close 0\n0 Arrive Ann apple 1\n").unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::CloseLine { .. }));
        assert!(matches!(events[1], Event::CustomerArrival { .. }));
    }

    #[test]
    fn rejects_blank_line() {
        assert!(matches!(
            parse("0 Arrive Ann\n\n").unwrap_err(),
            ScenarioError::EmptyRecord { line: 2 }
        ));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(matches!(
            parse("0 Depart Ann\n").unwrap_err(),
            ScenarioError::UnknownEventKind { line: 1, .. }
        ));
    }

    #[test]
    fn rejects_negative_tick() {
        assert!(matches!(
            parse("-3 Arrive Ann\n").unwrap_err(),
            ScenarioError::InvalidNumber { line: 1, .. }
        ));
    }

    #[test]
    fn rejects_item_without_time() {
        assert!(matches!(
            parse("0 Arrive Ann apple\n").unwrap_err(),
            ScenarioError::DanglingItem { line: 1, .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_lane() {
        assert!(matches!(
            parse("0 Close 2\n").unwrap_err(),
            ScenarioError::LaneOutOfRange {
                line: 1,
                lane: 2,
                lanes: 2
            }
        ));
    }

    #[test]
    fn rejects_close_without_lane() {
        assert!(matches!(
            parse("0 Close\n").unwrap_err(),
            ScenarioError::MissingField {
                line: 1,
                field: "lane index"
            }
        ));
    }
}
