//! Option descriptors.

/// What an option does when it is matched, and what its result slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A bare token, bound by position rather than by name.
    Positional,
    /// Set to `true` when present.
    Flag,
    /// Takes the next token as a string value.
    Str,
    /// Takes the next token and parses it as a base-10 integer.
    Int,
    /// Counts how many times it was given.
    Increment,
}

impl Kind {
    /// Whether matching this kind claims the following token.
    pub fn takes_arg(self) -> bool {
        matches!(self, Kind::Str | Kind::Int)
    }
}

/// A single recognized option.
///
/// Every option carries at least one name: [`Opt::new`] and
/// [`Opt::positional`] take a long name, [`Opt::short_only`] takes a short one.
#[derive(Debug, Clone)]
pub struct Opt {
    pub(crate) long_name: Option<String>,
    pub(crate) short_name: Option<char>,
    pub(crate) metavar: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) kind: Kind,
    pub(crate) required: bool,
}

impl Opt {
    /// A flag named `--name`. Use [`Opt::kind`] to make it take a value.
    pub fn new(name: &str) -> Self {
        debug_assert!(!name.is_empty(), "option long name must not be empty");
        Opt {
            long_name: Some(name.to_string()),
            short_name: None,
            metavar: None,
            help: None,
            kind: Kind::Flag,
            required: false,
        }
    }

    /// A flag that only has a short name, `-c`.
    pub fn short_only(c: char) -> Self {
        Opt {
            long_name: None,
            short_name: Some(c),
            metavar: None,
            help: None,
            kind: Kind::Flag,
            required: false,
        }
    }

    /// A positional argument. `name` is shown in usage and error messages
    /// unless a metavariable is set.
    pub fn positional(name: &str) -> Self {
        debug_assert!(!name.is_empty(), "positional name must not be empty");
        Opt {
            long_name: Some(name.to_string()),
            short_name: None,
            metavar: None,
            help: None,
            kind: Kind::Positional,
            required: false,
        }
    }

    pub fn short(mut self, c: char) -> Self {
        debug_assert!(
            self.kind != Kind::Positional,
            "positional options have no short name"
        );
        self.short_name = Some(c);
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn metavar(mut self, metavar: &str) -> Self {
        self.metavar = Some(metavar.to_string());
        self
    }

    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Fail the parse if this option is never given. Ignored for positionals,
    /// which are always required by count.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn get_kind(&self) -> Kind {
        self.kind
    }

    pub fn is_positional(&self) -> bool {
        self.kind == Kind::Positional
    }

    pub fn is_required(&self) -> bool {
        self.required && !self.is_positional()
    }

    pub fn get_help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The placeholder shown after a value-taking option: metavariable, then
    /// long name, then short name.
    pub(crate) fn placeholder(&self) -> String {
        if let Some(ref m) = self.metavar {
            m.clone()
        } else if let Some(ref l) = self.long_name {
            l.clone()
        } else {
            self.short_name.map(String::from).unwrap_or_default()
        }
    }

    /// Name used for a positional in usage and help.
    pub(crate) fn display_name(&self) -> &str {
        self.metavar
            .as_deref()
            .or(self.long_name.as_deref())
            .unwrap_or_default()
    }
}

/// `-s|--long`, `-s` or `--long`.
pub(crate) fn format_names(short: Option<char>, long: Option<&str>) -> String {
    match (short, long) {
        (Some(s), Some(l)) => format!("-{}|--{}", s, l),
        (Some(s), None) => format!("-{}", s),
        (None, Some(l)) => format!("--{}", l),
        (None, None) => String::new(),
    }
}
