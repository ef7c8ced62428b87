//! Parsing of one shell input line into an intent.

use thiserror::Error;
use workshop_core::input::parse_price;
use workshop_core::{OrderCommand, OrderId, SparePartInput, TaskFilter};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("unknown command '{0}' (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a valid {what}")]
    Invalid { what: &'static str, value: String },
}

/// What the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Help,
    Quit,
    List,
    New,
    Edit(OrderId),
    Show,
    Hub,
    Entry,
    Filter(TaskFilter),
    Save,
    Back,
    Export,
    Log(String),
    Order(OrderCommand),
}

/// Splits `lhs = rhs`; the right side is `None` without an `=`.
fn split_assignment(rest: &str) -> (&str, Option<&str>) {
    match rest.split_once('=') {
        Some((lhs, rhs)) => (lhs.trim(), Some(rhs.trim())),
        None => (rest.trim(), None),
    }
}

/// Converts a 1-based position as shown in the parts table.
fn parse_position(raw: &str) -> Result<usize, IntentError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(IntentError::Invalid {
            what: "part number",
            value: raw.trim().to_string(),
        }),
    }
}

fn required<'a>(
    value: &'a str,
    usage: &'static str,
) -> Result<&'a str, IntentError> {
    if value.is_empty() {
        Err(IntentError::Usage(usage))
    } else {
        Ok(value)
    }
}

impl Intent {
    /// Parses a non-empty line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, IntentError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let intent = match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "list" => Self::List,
            "new" => Self::New,
            "edit" => {
                let raw = required(rest, "edit <order id>")?;
                let id = raw.parse().map_err(|_| IntentError::Invalid {
                    what: "order id",
                    value: raw.to_string(),
                })?;
                Self::Edit(id)
            }
            "show" => Self::Show,
            "hub" => Self::Hub,
            "entry" => Self::Entry,
            "filter" => {
                let raw = required(rest, "filter <all|task type>")?;
                let filter = TaskFilter::parse(raw).ok_or_else(|| IntentError::Invalid {
                    what: "task type",
                    value: raw.to_string(),
                })?;
                Self::Filter(filter)
            }
            "save" => Self::Save,
            "back" => Self::Back,
            "export" => Self::Export,
            "log" => Self::Log(required(rest, "log <level>")?.to_string()),
            "add" => Self::Order(OrderCommand::add_task(required(rest, "add <task name>")?)),
            "remove" => Self::Order(OrderCommand::remove_task(required(
                rest,
                "remove <task name>",
            )?)),
            "qty" => {
                let (name, raw) = split_assignment(rest);
                let name = required(name, "qty <task name> = <quantity>")?;
                Self::Order(OrderCommand::set_quantity(name, raw.unwrap_or_default()))
            }
            "note" => {
                let (name, text) = split_assignment(rest);
                let name = required(name, "note <task name> = <remarks>")?;
                Self::Order(OrderCommand::set_remarks(name, text.unwrap_or_default()))
            }
            "vehicle" => Self::Order(OrderCommand::SetVehicleNumber {
                text: rest.to_string(),
            }),
            "part" => {
                let (name, spec) = split_assignment(rest);
                let (quantity, price) = match spec.map(|s| s.split_once('@')) {
                    Some(Some((qty, price))) => (qty.trim(), parse_price(price)),
                    Some(None) => (spec.unwrap_or_default(), None),
                    None => ("1", None),
                };
                let mut input = SparePartInput::new(name, quantity);
                input.unit_price = price;
                Self::Order(OrderCommand::AddSparePart(input))
            }
            "unpart" => Self::Order(OrderCommand::RemoveSparePart {
                name: required(rest, "unpart <part name>")?.to_string(),
            }),
            "unpart-at" => Self::Order(OrderCommand::RemoveSparePartAt {
                index: parse_position(required(rest, "unpart-at <part number>")?)?,
            }),
            "part-qty" => {
                let (position, raw) = split_assignment(rest);
                let position = required(position, "part-qty <part number> = <quantity>")?;
                Self::Order(OrderCommand::SetSparePartQuantity {
                    index: parse_position(position)?,
                    raw: raw.unwrap_or_default().to_string(),
                })
            }
            other => return Err(IntentError::Unknown(other.to_string())),
        };

        Ok(Some(intent))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use workshop_core::TaskType;

    use super::*;

    fn parse(line: &str) -> Intent {
        Intent::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(Intent::parse("   "), Ok(None));
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse("LIST"), Intent::List);
        assert_eq!(parse("Hub"), Intent::Hub);
    }

    #[test]
    fn add_keeps_full_task_name() {
        assert_eq!(
            parse("add   Check Oil Level "),
            Intent::Order(OrderCommand::add_task("Check Oil Level"))
        );
    }

    #[test]
    fn qty_passes_raw_value_through() {
        assert_eq!(
            parse("qty Refill Gear Oil = abc"),
            Intent::Order(OrderCommand::set_quantity("Refill Gear Oil", "abc"))
        );
        assert_eq!(
            parse("qty Refill Gear Oil"),
            Intent::Order(OrderCommand::set_quantity("Refill Gear Oil", ""))
        );
    }

    #[test]
    fn note_may_be_cleared() {
        assert_eq!(
            parse("note Inspect Belts ="),
            Intent::Order(OrderCommand::set_remarks("Inspect Belts", ""))
        );
    }

    #[test]
    fn part_with_quantity_and_price() {
        assert_eq!(
            parse("part Brake Pad = 2 @ $18.75"),
            Intent::Order(OrderCommand::AddSparePart(
                SparePartInput::new("Brake Pad", "2").with_unit_price(dec!(18.75))
            ))
        );
    }

    #[test]
    fn part_without_quantity_defaults_to_one() {
        assert_eq!(
            parse("part Fuse"),
            Intent::Order(OrderCommand::AddSparePart(SparePartInput::new("Fuse", "1")))
        );
    }

    #[test]
    fn part_positions_are_one_based() {
        assert_eq!(
            parse("unpart-at 2"),
            Intent::Order(OrderCommand::RemoveSparePartAt { index: 1 })
        );
        assert_eq!(
            parse("part-qty 1 = 4"),
            Intent::Order(OrderCommand::SetSparePartQuantity {
                index: 0,
                raw: "4".to_string()
            })
        );
        assert!(matches!(
            Intent::parse("unpart-at 0"),
            Err(IntentError::Invalid { .. })
        ));
    }

    #[test]
    fn filter_accepts_types_and_all() {
        assert_eq!(parse("filter repair"), Intent::Filter(TaskFilter::Type(TaskType::Repair)));
        assert_eq!(parse("filter all"), Intent::Filter(TaskFilter::All));
        assert!(matches!(
            Intent::parse("filter paint"),
            Err(IntentError::Invalid { .. })
        ));
    }

    #[test]
    fn edit_requires_numeric_id() {
        assert_eq!(parse("edit 1735689600000"), Intent::Edit(1735689600000));
        assert_eq!(Intent::parse("edit"), Err(IntentError::Usage("edit <order id>")));
        assert!(matches!(Intent::parse("edit abc"), Err(IntentError::Invalid { .. })));
    }

    #[test]
    fn unknown_verb_is_reported() {
        assert_eq!(
            Intent::parse("fly away"),
            Err(IntentError::Unknown("fly".to_string()))
        );
    }
}
