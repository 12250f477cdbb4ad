//! The option table and name resolution.

use crate::opt::Opt;

/// Ordered set of options recognized by a program.
///
/// Declared order is kept as-is; [`OptionTable::partition`] derives the
/// named-then-positional order used by the parser and the help renderer.
#[derive(Debug, Clone, Default)]
pub struct OptionTable {
    options: Vec<Opt>,
}

impl OptionTable {
    pub fn new() -> Self {
        OptionTable {
            options: Vec::new(),
        }
    }

    pub fn option(mut self, opt: Opt) -> Self {
        self.options.push(opt);
        self
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Opt> {
        self.options.get(idx)
    }

    /// Options in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Opt> {
        self.options.iter()
    }

    /// Split declared indices into named and positional runs, each in
    /// declared order. Either run may be empty.
    pub fn partition(&self) -> Partition {
        let (positional, named): (Vec<usize>, Vec<usize>) =
            (0..self.options.len()).partition(|&i| self.options[i].is_positional());
        Partition { named, positional }
    }

    /// Look up a non-positional option by its long name.
    pub fn find_long(&self, name: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|o| !o.is_positional() && o.long_name() == Some(name))
    }

    /// Look up a non-positional option by its short name.
    pub fn find_short(&self, c: char) -> Option<usize> {
        self.options
            .iter()
            .position(|o| !o.is_positional() && o.short_name() == Some(c))
    }

    /// Look up any option, positionals included, by long name.
    pub fn find_any_long(&self, name: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.long_name() == Some(name))
    }
}

/// Declared indices split into the named run and the positional run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub named: Vec<usize>,
    pub positional: Vec<usize>,
}

impl Partition {
    pub fn positional_count(&self) -> usize {
        self.positional.len()
    }

    /// Named indices followed by positional indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.named.iter().chain(self.positional.iter()).copied()
    }
}
