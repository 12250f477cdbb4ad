//! Usage line and help table rendering.

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::opt::{format_names, Kind, Opt};
use crate::table::OptionTable;

/// Column at which help text starts in [`write_help`].
pub const HELP_COLUMN: usize = 30;

/// Option signature without brackets: names plus placeholder for
/// value-taking kinds, display name for positionals.
fn signature(opt: &Opt) -> String {
    match opt.get_kind() {
        Kind::Positional => opt.display_name().to_string(),
        Kind::Flag | Kind::Increment => format_names(opt.short_name(), opt.long_name()),
        Kind::Str | Kind::Int => format!(
            "{} {}",
            format_names(opt.short_name(), opt.long_name()),
            opt.placeholder()
        ),
    }
}

fn usage_item(opt: &Opt) -> String {
    if opt.is_positional() || opt.is_required() {
        signature(opt)
    } else {
        format!("[{}]", signature(opt))
    }
}

/// Everything after the last `/` of `progname`.
fn basename(progname: &str) -> &str {
    progname.rsplit('/').next().unwrap_or(progname)
}

/// One-line synopsis: program name, named options in declared order,
/// then positionals.
pub fn write_usage<W: io::Write>(
    table: &OptionTable,
    out: &mut W,
    progname: &str,
) -> io::Result<()> {
    write!(out, "{}", basename(progname))?;
    for idx in table.partition().iter() {
        if let Some(opt) = table.get(idx) {
            write!(out, " {}", usage_item(opt))?;
        }
    }
    writeln!(out)
}

/// Help table, one entry per option, help text aligned at [`HELP_COLUMN`].
pub fn write_help<W: io::Write>(table: &OptionTable, out: &mut W) -> io::Result<()> {
    for idx in table.partition().iter() {
        let Some(opt) = table.get(idx) else { continue };
        let left = format!("  {}", signature(opt));
        match opt.get_help() {
            Some(help) => {
                let width = left.width();
                if width >= HELP_COLUMN {
                    writeln!(out, "{}", left)?;
                    writeln!(out, "{:indent$}{}", "", help, indent = HELP_COLUMN)?;
                } else {
                    writeln!(out, "{}{:pad$}{}", left, "", help, pad = HELP_COLUMN - width)?;
                }
            }
            None => writeln!(out, "{}", left)?,
        }
    }
    Ok(())
}

pub fn usage_string(table: &OptionTable, progname: &str) -> String {
    let mut out = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_usage(table, &mut out, progname);
    String::from_utf8_lossy(&out).into_owned()
}

pub fn help_string(table: &OptionTable) -> String {
    let mut out = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_help(table, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
