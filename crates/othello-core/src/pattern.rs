//! Ordered line-pattern tables used by the move rater.
//!
//! Each rule is an anchored regular expression over the line alphabet of
//! [`crate::line`] together with a score. Tables are searched top to bottom
//! and a line matches a rule when either the line or its reversal matches;
//! the first matching rule wins.

use std::sync::OnceLock;

use regex::Regex;

/// A single `(pattern, score)` entry of a pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub score: i32,
}

const fn rule(pattern: &'static str, score: i32) -> PatternRule {
    PatternRule { pattern, score }
}

/// Rules for a full edge line through a candidate on row or column 1 or 8.
///
/// Rules 30 and 31 share a pattern; the first one always wins, so rule 31
/// never matches. It is kept so rule numbers stay stable.
#[rustfmt::skip]
pub static BORDER_RULES: [PatternRule; 48] = [
    rule(r"^m+x.*$", 9),
    rule(r"^o+xo+_$", 9),
    rule(r"^m+o+x.*$", 9),
    rule(r"^_+m+o+x_+$", 9),
    rule(r"^_+x_o+_+$", 5),
    rule(r"^o+xm+o+.*$", 4),
    rule(r"^o+m+xo+.*$", 4),
    rule(r"^.*ox_o.*$", -5),
    rule(r"^_+x_+$", 8),
    rule(r"^_+o+x_$", -9),
    rule(r"^_+o+x__+$", -5),
    rule(r"^_+xo+m+_o+_+$", 5),
    rule(r"^_+m+o+x_+$", 6),
    rule(r"^_xo+_.*$", -10),
    rule(r"^__+xo+_.*$", -4),
    rule(r"^_+x_o+_+$", 5),
    rule(r"^_o+xm+o+.*$", 9),
    rule(r"^_+x__m+_+$", 4),
    rule(r"^_+xo+m+_.*$", 7),
    rule(r"^m+xm+.*$", 9),
    rule(r"^_x_m+.*$", -5),
    rule(r"^_+m+o+xm+_+$", 9),
    rule(r"^_+m+_x_+$", -5),
    rule(r"^_+m+x_+$", 7),
    rule(r"^_+m+_o+_x_+$", 7),
    rule(r"^_+o+_m+x_+$", 5),
    rule(r"^_+m+xo+m+_+$", 8),
    rule(r"^_+m+x_m+_+$", -5),
    rule(r"^_xm+o.*$", -8),
    rule(r"^o+_*x_+$", -8),
    rule(r"^_+m+xo+_+$", -6),
    rule(r"^_+m+xo+_+$", -7),
    rule(r"^_+m+xo+_m+_+$", -6),
    rule(r"^_+o+x_m+_+$", 6),
    rule(r"^__mxo+m+[mo]+$", 7),
    rule(r"^_mxo.*$", -10),
    rule(r"^_+o+xm+_o+_+$", -9),
    rule(r"^o+xm+_+$", -7),
    rule(r"^o+xo+m+_+$", -7),
    rule(r"^_+x___o+_+$", 4),
    rule(r"^_+ox__m+_+$", -4),
    rule(r"^_+o+xo+_+$", 6),
    rule(r"^m+__x_+$", 6),
    rule(r"^m+_x_+$", -3),
    rule(r"^_xo+m+o+.*$", -9),
    rule(r"^o+m+o+x$", 10),
    rule(r"^o+m+o+x_+$", -6),
    rule(r"^_o+xo+.*$", 8),
];

/// Rules for the diagonal through a candidate diagonally adjacent to a corner.
#[rustfmt::skip]
pub static DIAGONAL_RULES: [PatternRule; 7] = [
    rule(r"^_xo+.*$", -9),
    rule(r"^_xm+o+.*$", -9),
    rule(r"^_xm+_+$", -2),
    rule(r"^_xm+o+m+_+$", -2),
    rule(r"^_xm+$", -2),
    rule(r"^_xo+m+$", -2),
    rule(r"^ox.+$", 1),
];

/// The rule that matched a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Position of the rule in its table.
    pub index: usize,
    pub score: i32,
    /// `true` if only the reversed line matched.
    pub reversed: bool,
}

/// A pattern table with its expressions compiled.
#[derive(Debug)]
pub struct PatternTable {
    rules: &'static [PatternRule],
    compiled: Vec<Regex>,
}

impl PatternTable {
    /// Compiles every rule of `rules`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first `regex::Error` if a pattern does not compile.
    pub fn compile(rules: &'static [PatternRule]) -> Result<PatternTable, regex::Error> {
        let compiled = rules
            .iter()
            .map(|rule| Regex::new(rule.pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PatternTable { rules, compiled })
    }

    pub fn rules(&self) -> &'static [PatternRule] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Finds the first rule matching `line` or its reversal.
    ///
    /// Both orientations are tried against a rule before moving on to the
    /// next one.
    pub fn find_match(&self, line: &str) -> Option<PatternMatch> {
        let reversed: String = line.chars().rev().collect();
        self.rules
            .iter()
            .zip(&self.compiled)
            .enumerate()
            .find_map(|(index, (rule, re))| {
                if re.is_match(line) {
                    Some(PatternMatch {
                        index,
                        score: rule.score,
                        reversed: false,
                    })
                } else if re.is_match(&reversed) {
                    Some(PatternMatch {
                        index,
                        score: rule.score,
                        reversed: true,
                    })
                } else {
                    None
                }
            })
    }
}

static BORDER_TABLE: OnceLock<PatternTable> = OnceLock::new();
static DIAGONAL_TABLE: OnceLock<PatternTable> = OnceLock::new();

fn compiled(rules: &'static [PatternRule]) -> PatternTable {
    PatternTable::compile(rules)
        .unwrap_or_else(|err| panic!("built-in pattern table does not compile: {err}"))
}

/// The compiled border table, built on first use.
pub fn border_patterns() -> &'static PatternTable {
    BORDER_TABLE.get_or_init(|| compiled(&BORDER_RULES))
}

/// The compiled diagonal table, built on first use.
pub fn diagonal_patterns() -> &'static PatternTable {
    DIAGONAL_TABLE.get_or_init(|| compiled(&DIAGONAL_RULES))
}
