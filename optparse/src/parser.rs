//! The argument scanner.

use tracing::{debug, trace};

use crate::cursor::ArgCursor;
use crate::error::{ParseError, Result};
use crate::matches::Matches;
use crate::table::OptionTable;

/// Parse a full argument vector; `args[0]` is the program name and is skipped.
pub fn parse<'t, 'a>(table: &'t OptionTable, args: &'a [String]) -> Result<Matches<'t, 'a>> {
    parse_args(table, args.get(1..).unwrap_or(&[]))
}

/// Parse arguments that do not include the program name.
pub fn parse_args<'t, 'a>(table: &'t OptionTable, args: &'a [String]) -> Result<Matches<'t, 'a>> {
    parse_args_partial(table, args).map_err(|rejected| rejected.error)
}

/// A failed parse and the results of every option applied before the error.
#[derive(Debug, Clone)]
pub struct Rejected<'t, 'a> {
    pub matches: Matches<'t, 'a>,
    pub error: ParseError,
}

/// Like [`parse`], but a failure keeps the options matched so far.
pub fn parse_partial<'t, 'a>(
    table: &'t OptionTable,
    args: &'a [String],
) -> std::result::Result<Matches<'t, 'a>, Rejected<'t, 'a>> {
    parse_args_partial(table, args.get(1..).unwrap_or(&[]))
}

/// Like [`parse_args`], but a failure keeps the options matched so far.
pub fn parse_args_partial<'t, 'a>(
    table: &'t OptionTable,
    args: &'a [String],
) -> std::result::Result<Matches<'t, 'a>, Rejected<'t, 'a>> {
    let mut matches = Matches::new(table);
    match scan(table, &mut matches, args) {
        Ok(()) => Ok(matches),
        Err(error) => Err(Rejected { matches, error }),
    }
}

fn scan<'a>(table: &OptionTable, matches: &mut Matches<'_, 'a>, args: &'a [String]) -> Result<()> {
    let partition = table.partition();
    let mut cursor = ArgCursor::new(args);
    let mut pos_count = 0;

    while let Some(token) = cursor.next_token() {
        if let Some(name) = token.strip_prefix("--") {
            let idx = table
                .find_long(name)
                .ok_or_else(|| ParseError::UnknownOption {
                    token: token.to_string(),
                })?;
            debug!(token, "long option");
            matches.assign(idx, token, &mut cursor)?;
        } else if token.len() > 1 && token.starts_with('-') {
            debug!(token, "short option group");
            parse_short_group(table, matches, &mut cursor, token)?;
        } else {
            let Some(&idx) = partition.positional.get(pos_count) else {
                return Err(ParseError::UnexpectedPositional {
                    token: token.to_string(),
                });
            };
            debug!(token, slot = pos_count, "positional");
            matches.set_positional(idx, token);
            pos_count += 1;
        }
    }

    if let Some(&idx) = partition.positional.get(pos_count) {
        let name = table
            .get(idx)
            .and_then(|o| o.long_name())
            .unwrap_or_default();
        return Err(ParseError::ExpectedPositional {
            name: name.to_string(),
        });
    }

    for &idx in &partition.named {
        let Some(opt) = table.get(idx) else { continue };
        if opt.is_required() && !matches.is_activated(idx) {
            return Err(ParseError::RequiredOption {
                long: opt.long_name().map(str::to_string),
                short: opt.short_name(),
            });
        }
    }

    debug!(args = args.len(), positionals = pos_count, "parsed");
    Ok(())
}

/// Apply each character of a `-xyz` token as a short option. A value-taking
/// option claims the token after the whole group, so only one is allowed.
fn parse_short_group<'a>(
    table: &OptionTable,
    matches: &mut Matches<'_, 'a>,
    cursor: &mut ArgCursor<'a>,
    token: &'a str,
) -> Result<()> {
    let mut claimed = false;

    for c in token.chars().skip(1) {
        let idx = table
            .find_short(c)
            .ok_or_else(|| ParseError::UnknownOption {
                token: token.to_string(),
            })?;
        let takes_arg = table.get(idx).is_some_and(|o| o.get_kind().takes_arg());
        if takes_arg {
            if claimed {
                return Err(ParseError::OneValuePerGroup {
                    token: token.to_string(),
                    short: c,
                });
            }
            claimed = true;
        }
        trace!(token, short = %c, "short option");
        matches.assign(idx, token, cursor)?;
    }

    Ok(())
}
