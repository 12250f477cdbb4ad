//! Parse results and value assignment.

use tracing::trace;

use crate::cursor::ArgCursor;
use crate::error::{LookupError, ParseError, Result};
use crate::opt::Kind;
use crate::table::OptionTable;

/// Typed result slot of one option. String values borrow the argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Flag(bool),
    Count(i64),
    Str(Option<&'a str>),
    Int(Option<i64>),
}

impl<'a> Value<'a> {
    fn initial(kind: Kind) -> Self {
        match kind {
            Kind::Flag => Value::Flag(false),
            Kind::Increment => Value::Count(0),
            Kind::Str | Kind::Positional => Value::Str(None),
            Kind::Int => Value::Int(None),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot<'a> {
    activated: bool,
    value: Value<'a>,
}

/// Results of one parse, one slot per declared option.
#[derive(Debug, Clone)]
pub struct Matches<'t, 'a> {
    table: &'t OptionTable,
    slots: Vec<Slot<'a>>,
}

impl<'t, 'a> Matches<'t, 'a> {
    pub(crate) fn new(table: &'t OptionTable) -> Self {
        let slots = table
            .iter()
            .map(|opt| Slot {
                activated: false,
                value: Value::initial(opt.get_kind()),
            })
            .collect();
        Matches { table, slots }
    }

    /// Apply a named option whose token is `token`. Value-taking kinds claim
    /// the next token from `cursor`.
    pub(crate) fn assign(
        &mut self,
        idx: usize,
        token: &'a str,
        cursor: &mut ArgCursor<'a>,
    ) -> Result<()> {
        debug_assert!(self.table.get(idx).is_some_and(|o| !o.is_positional()));
        let slot = &mut self.slots[idx];
        match &mut slot.value {
            Value::Flag(b) => *b = true,
            Value::Count(n) => *n += 1,
            Value::Str(s) => {
                let val = claim(cursor, token)?;
                trace!(token, value = val, "string value");
                *s = Some(val);
            }
            Value::Int(n) => {
                let val = claim(cursor, token)?;
                trace!(token, value = val, "integer value");
                *n = Some(val.parse::<i64>().map_err(|_| ParseError::IntType {
                    token: token.to_string(),
                })?);
            }
        }
        slot.activated = true;
        Ok(())
    }

    pub(crate) fn set_positional(&mut self, idx: usize, token: &'a str) {
        let slot = &mut self.slots[idx];
        slot.value = Value::Str(Some(token));
        slot.activated = true;
    }

    pub(crate) fn is_activated(&self, idx: usize) -> bool {
        self.slots[idx].activated
    }

    /// Index of the option called `name`: a long name (positionals included),
    /// or a single-character short name.
    fn index_of(&self, name: &str) -> Option<usize> {
        self.table.find_any_long(name).or_else(|| {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.table.find_short(c),
                _ => None,
            }
        })
    }

    /// Whether the option was given on the command line.
    pub fn is_present(&self, name: &str) -> bool {
        self.index_of(name).is_some_and(|idx| self.is_activated(idx))
    }

    pub fn value(&self, name: &str) -> std::result::Result<Value<'a>, LookupError> {
        self.index_of(name)
            .map(|idx| self.slots[idx].value)
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }

    /// Typed access to an option's result.
    ///
    /// `bool` for flags, `i64` for counters, `Option<&str>` for strings and
    /// positionals, `Option<i64>` for integers.
    pub fn get<T: FromValue<'a>>(&self, name: &str) -> std::result::Result<T, LookupError> {
        let value = self.value(name)?;
        T::from_value(value).ok_or_else(|| LookupError::KindMismatch {
            name: name.to_string(),
            expected: T::EXPECTED,
        })
    }
}

fn claim<'a>(cursor: &mut ArgCursor<'a>, token: &str) -> Result<&'a str> {
    cursor.claim_value().ok_or_else(|| ParseError::ArgumentRequired {
        token: token.to_string(),
    })
}

/// Conversion from a result slot into a caller-facing type.
pub trait FromValue<'a>: Sized {
    const EXPECTED: &'static str;

    fn from_value(v: Value<'a>) -> Option<Self>;
}

impl<'a> FromValue<'a> for bool {
    const EXPECTED: &'static str = "flag";

    fn from_value(v: Value<'a>) -> Option<Self> {
        match v {
            Value::Flag(b) => Some(b),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for i64 {
    const EXPECTED: &'static str = "increment";

    fn from_value(v: Value<'a>) -> Option<Self> {
        match v {
            Value::Count(n) => Some(n),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for Option<&'a str> {
    const EXPECTED: &'static str = "string";

    fn from_value(v: Value<'a>) -> Option<Self> {
        match v {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for Option<i64> {
    const EXPECTED: &'static str = "int";

    fn from_value(v: Value<'a>) -> Option<Self> {
        match v {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }
}
