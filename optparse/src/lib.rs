//! Small command-line option parser.
//!
//! Options are declared once in an [`OptionTable`] and applied to an argument
//! vector with [`parse`]:
//! - `--name` long options, `-abc` grouped short options, bare positionals
//! - value-taking options (`Kind::Str`, `Kind::Int`) take the next token
//! - results are read back with `matches.get::<T>("name")`
//!
//! ```
//! use optparse::{parse, Kind, Opt, OptionTable};
//!
//! let table = OptionTable::new()
//!     .option(Opt::new("verbose").short('v').kind(Kind::Increment))
//!     .option(Opt::new("out").short('o').kind(Kind::Str).required())
//!     .option(Opt::positional("input"));
//!
//! let args: Vec<String> = ["prog", "-vv", "-o", "x.txt", "in.txt"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let matches = parse(&table, &args).unwrap();
//! assert_eq!(matches.get::<i64>("verbose"), Ok(2));
//! assert_eq!(matches.get::<Option<&str>>("out"), Ok(Some("x.txt")));
//! assert_eq!(matches.get::<Option<&str>>("input"), Ok(Some("in.txt")));
//! ```

mod cursor;
mod error;
mod help;
mod matches;
mod opt;
mod parser;
mod table;

pub use cursor::ArgCursor;
pub use error::{write_error, ErrorKind, LookupError, ParseError, Result};
pub use help::{help_string, usage_string, write_help, write_usage, HELP_COLUMN};
pub use matches::{FromValue, Matches, Value};
pub use opt::{Kind, Opt};
pub use parser::{parse, parse_args, parse_args_partial, parse_partial, Rejected};
pub use table::{OptionTable, Partition};
