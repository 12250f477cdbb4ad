use std::fmt;

use optparse::{Kind, Matches, Opt, OptionTable, ParseError, Rejected};

use crate::error::Result;

/// Everything the demo reads from its command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmdline<'a> {
    pub foo: bool,
    pub bar: bool,
    pub help: bool,
    pub verbose: i64,
    pub count: Option<i64>,
    pub path: Option<&'a str>,
    pub str: Option<&'a str>,
}

pub fn build_options() -> OptionTable {
    OptionTable::new()
        .option(Opt::new("foo").short('f').help("foo option"))
        .option(Opt::new("bar").short('b').help("bar option"))
        .option(Opt::new("help").short('h').help("show help message"))
        .option(Opt::positional("path").help("a path"))
        .option(
            Opt::new("str")
                .short('s')
                .kind(Kind::Str)
                .metavar("STR")
                .required()
                .help("string option"),
        )
        .option(
            Opt::new("count")
                .short('n')
                .kind(Kind::Int)
                .metavar("N")
                .help("a number"),
        )
        .option(
            Opt::new("verbose")
                .short('v')
                .kind(Kind::Increment)
                .help("verbosity level"),
        )
}

/// Outcome of reading the demo's command line.
#[derive(Debug)]
pub enum Parsed<'a> {
    Run(Cmdline<'a>),
    /// `--help` was matched, possibly before a later parse error.
    Help,
    Usage(ParseError),
}

pub fn parse_cmdline<'a>(table: &OptionTable, argv: &'a [String]) -> Result<Parsed<'a>> {
    match optparse::parse_partial(table, argv) {
        Ok(matches) => {
            let cmdline = from_matches(&matches)?;
            if cmdline.help {
                Ok(Parsed::Help)
            } else {
                Ok(Parsed::Run(cmdline))
            }
        }
        Err(Rejected { matches, error }) => {
            if matches.get::<bool>("help")? {
                Ok(Parsed::Help)
            } else {
                Ok(Parsed::Usage(error))
            }
        }
    }
}

fn from_matches<'a>(m: &Matches<'_, 'a>) -> Result<Cmdline<'a>> {
    Ok(Cmdline {
        foo: m.get("foo")?,
        bar: m.get("bar")?,
        help: m.get("help")?,
        verbose: m.get("verbose")?,
        count: m.get("count")?,
        path: m.get("path")?,
        str: m.get("str")?,
    })
}

struct OrNull<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ref v) => write!(f, "{}", v),
            None => write!(f, "(null)"),
        }
    }
}

impl fmt::Display for Cmdline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "foo={} bar={} verbose={} count={} path={} str={}",
            u8::from(self.foo),
            u8::from(self.bar),
            self.verbose,
            OrNull(self.count),
            OrNull(self.path),
            OrNull(self.str),
        )
    }
}
