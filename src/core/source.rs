//! Per-render colour sources derived from a validated [`ColorScheme`].
//!
//! A [`ColorSource`] borrows its colours from the scheme and owns nothing but
//! the rotation cursor, so every render call starts from the first colour and
//! two charts never share a cursor.
//!
//! [`ColorScheme`]: crate::core::scheme::ColorScheme

use std::fmt;

use crate::core::scheme::SchemeError;

/// Threshold comparison used by rule schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparator {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl Comparator {
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "=" | "==" => Some(Self::Eq),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "=",
        }
    }

    #[allow(clippy::float_cmp)]
    #[inline]
    #[must_use]
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Lt => value < threshold,
            Self::Le => value <= threshold,
            Self::Gt => value > threshold,
            Self::Ge => value >= threshold,
            Self::Eq => value == threshold,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// When a rule applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Condition {
    Compare(Comparator, f64),
    /// Catch-all; always matches and must close the rule list.
    Else,
}

impl Condition {
    #[inline]
    #[must_use]
    pub fn matches(self, value: f64) -> bool {
        match self {
            Self::Compare(op, threshold) => op.holds(value, threshold),
            Self::Else => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Rule {
    condition: Condition,
    key: String,
    color: String,
}

/// Ordered threshold rules, first match wins.
///
/// Construction guarantees the list ends in exactly one [`Condition::Else`]
/// and that every key names a colour, so evaluation is total.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    catch_all: Rule,
}

impl RuleSet {
    /// Bind `rules` (condition, colour key) to `colors` (key, colour).
    pub fn new(
        rules: impl IntoIterator<Item = (Condition, String)>,
        colors: &[(String, String)],
    ) -> Result<Self, SchemeError> {
        let lookup = |key: String| -> Result<Rule, SchemeError> {
            match colors.iter().find(|(k, _)| *k == key) {
                Some((_, color)) => Ok(Rule {
                    condition: Condition::Else,
                    key,
                    color: color.clone(),
                }),
                None => Err(SchemeError::UnknownColorKey(key)),
            }
        };

        let mut compared = Vec::new();
        let mut catch_all = None;
        for (condition, key) in rules {
            if catch_all.is_some() {
                return Err(SchemeError::RuleAfterCatchAll);
            }
            let rule = Rule {
                condition,
                ..lookup(key)?
            };
            match condition {
                Condition::Else => catch_all = Some(rule),
                Condition::Compare(..) => compared.push(rule),
            }
        }

        Ok(Self {
            rules: compared,
            catch_all: catch_all.ok_or(SchemeError::MissingCatchAll)?,
        })
    }

    fn first_match(&self, value: f64) -> &Rule {
        self.rules
            .iter()
            .find(|r| r.condition.matches(value))
            .unwrap_or(&self.catch_all)
    }

    /// Colour key of the first rule that holds for `value`.
    #[must_use]
    pub fn key_for(&self, value: f64) -> &str {
        &self.first_match(value).key
    }

    /// Colour bound to [`RuleSet::key_for`].
    #[must_use]
    pub fn color_for(&self, value: f64) -> &str {
        &self.first_match(value).color
    }

    /// Rules in evaluation order, catch-all last.
    pub fn conditions(&self) -> impl Iterator<Item = (Condition, &str)> {
        self.rules
            .iter()
            .chain(std::iter::once(&self.catch_all))
            .map(|r| (r.condition, r.color.as_str()))
    }
}

/// Round-robin walk over a colour list.
#[derive(Clone, Debug)]
pub struct Rotation<'a> {
    colors: &'a [String],
    cursor: usize,
}

impl<'a> Rotation<'a> {
    #[must_use]
    pub fn new(colors: &'a [String]) -> Self {
        Self { colors, cursor: 0 }
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&'a str> {
        self.colors.get(self.cursor).map(String::as_str)
    }

    #[inline]
    pub fn advance(&mut self) {
        if !self.colors.is_empty() {
            self.cursor = (self.cursor + 1) % self.colors.len();
        }
    }
}

/// Where a renderer gets per-item colours from during one render call.
#[derive(Clone, Debug)]
pub enum ColorSource<'a> {
    Mono,
    Cycle(Rotation<'a>),
    Rules(&'a RuleSet),
}

impl<'a> ColorSource<'a> {
    /// Colour for an item carrying `value`, without moving the cursor.
    #[must_use]
    pub fn current(&self, value: f64) -> Option<&'a str> {
        match self {
            Self::Mono => None,
            Self::Cycle(rotation) => rotation.current(),
            Self::Rules(rules) => Some(rules.color_for(value)),
        }
    }

    /// Step the rotation cursor; a no-op for the other sources.
    pub fn advance(&mut self) {
        if let Self::Cycle(rotation) = self {
            rotation.advance();
        }
    }

    /// [`ColorSource::current`] followed by [`ColorSource::advance`].
    pub fn take(&mut self, value: f64) -> Option<&'a str> {
        let color = self.current(value);
        self.advance();
        color
    }
}
