//! Colour scheme descriptors, the scheme catalog, and resolution into a
//! validated [`ColorScheme`].
//!
//! ### Descriptor syntax
//! Schemes can be written inline as text (used by the CLI):
//!
//! * `mono`
//! * `rotate:red,#0f0,light blue`
//! * `rules:<0=dark red;>=10=yellow;else=default`
//!
//! In the text form each rule's colour doubles as its key.  Programmatic
//! descriptors may bind rules to named keys instead (see the `signed`
//! built-in).

use std::{error::Error, fmt, str::FromStr, sync::OnceLock};

use crate::core::{
    palette::{
        DISTINCT_COLORS_16, DISTINCT_COLORS_256, DISTINCT_COLORS_TRUE, SIGNED_NEGATIVE,
        SIGNED_NONNEGATIVE,
    },
    source::{ColorSource, Comparator, Condition, Rotation, RuleSet},
};

pub const MODE_MONO: &str = "mono";
pub const MODE_ROTATE: &str = "rotate";
pub const MODE_RULES: &str = "rules";
const ELSE: &str = "else";

#[derive(Debug, Clone, PartialEq)]
pub enum SchemeError {
    UnknownScheme(String),
    UnknownMode(String),
    UnknownComparator(String),
    MissingThreshold(String),
    MissingCatchAll,
    RuleAfterCatchAll,
    UnknownColorKey(String),
    EmptyRotation,
    Syntax(String),
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeError::UnknownScheme(name) => write!(f, "unknown color scheme: {name}"),
            SchemeError::UnknownMode(mode) => write!(f, "unknown color scheme mode: {mode}"),
            SchemeError::UnknownComparator(op) => write!(f, "unknown rule comparator `{op}`"),
            SchemeError::MissingThreshold(op) => write!(f, "rule `{op}` needs a threshold"),
            SchemeError::MissingCatchAll => f.write_str("rule list must end with an `else` rule"),
            SchemeError::RuleAfterCatchAll => f.write_str("`else` must be the last rule"),
            SchemeError::UnknownColorKey(key) => write!(f, "rule refers to unknown color `{key}`"),
            SchemeError::EmptyRotation => f.write_str("rotating scheme needs at least one color"),
            SchemeError::Syntax(text) => write!(f, "malformed scheme descriptor `{text}`"),
        }
    }
}
impl Error for SchemeError {}

/// Colours attached to a descriptor.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SchemeColors {
    #[default]
    None,
    /// Ordered list, used by `rotate`.
    Sequence(Vec<String>),
    /// Key → colour, used by `rules`.
    Keyed(Vec<(String, String)>),
}

/// One unvalidated rule: `op` is a comparator symbol or `else`.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSpec {
    pub op: String,
    pub threshold: Option<f64>,
    pub key: String,
}

impl RuleSpec {
    pub fn compare(op: impl Into<String>, threshold: f64, key: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            threshold: Some(threshold),
            key: key.into(),
        }
    }

    pub fn otherwise(key: impl Into<String>) -> Self {
        Self {
            op: ELSE.to_owned(),
            threshold: None,
            key: key.into(),
        }
    }

    fn condition(&self) -> Result<Condition, SchemeError> {
        if self.op == ELSE {
            return Ok(Condition::Else);
        }
        let op = Comparator::parse(&self.op)
            .ok_or_else(|| SchemeError::UnknownComparator(self.op.clone()))?;
        let threshold = self
            .threshold
            .ok_or_else(|| SchemeError::MissingThreshold(self.op.clone()))?;
        Ok(Condition::Compare(op, threshold))
    }
}

/// Declarative `{mode, colors, rules}` description of a scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemeDescriptor {
    pub mode: String,
    pub colors: SchemeColors,
    pub rules: Vec<RuleSpec>,
}

impl SchemeDescriptor {
    #[must_use]
    pub fn mono() -> Self {
        Self {
            mode: MODE_MONO.to_owned(),
            colors: SchemeColors::None,
            rules: Vec::new(),
        }
    }

    pub fn rotate<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: MODE_ROTATE.to_owned(),
            colors: SchemeColors::Sequence(colors.into_iter().map(Into::into).collect()),
            rules: Vec::new(),
        }
    }

    pub fn rules<K, C>(colors: impl IntoIterator<Item = (K, C)>, rules: Vec<RuleSpec>) -> Self
    where
        K: Into<String>,
        C: Into<String>,
    {
        Self {
            mode: MODE_RULES.to_owned(),
            colors: SchemeColors::Keyed(
                colors
                    .into_iter()
                    .map(|(k, c)| (k.into(), c.into()))
                    .collect(),
            ),
            rules,
        }
    }

    fn color_of<'a>(&'a self, key: &'a str) -> &'a str {
        match &self.colors {
            SchemeColors::Keyed(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map_or(key, |(_, c)| c.as_str()),
            _ => key,
        }
    }
}

impl fmt::Display for SchemeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mode)?;
        match self.mode.as_str() {
            MODE_RULES => {
                for (i, rule) in self.rules.iter().enumerate() {
                    f.write_str(if i == 0 { ":" } else { ";" })?;
                    match rule.threshold {
                        Some(t) if rule.op != ELSE => write!(f, "{}{t}", rule.op)?,
                        _ => f.write_str(&rule.op)?,
                    }
                    write!(f, "={}", self.color_of(&rule.key))?;
                }
            }
            _ => {
                let colors: Vec<&str> = match &self.colors {
                    SchemeColors::None => Vec::new(),
                    SchemeColors::Sequence(c) => c.iter().map(String::as_str).collect(),
                    SchemeColors::Keyed(c) => c.iter().map(|(_, v)| v.as_str()).collect(),
                };
                if !colors.is_empty() {
                    write!(f, ":{}", colors.join(","))?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for SchemeDescriptor {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || SchemeError::Syntax(s.to_owned());
        let (mode, body) = match s.split_once(':') {
            Some((m, b)) => (m.trim(), b.trim()),
            None => (s.trim(), ""),
        };
        if mode.is_empty() {
            return Err(syntax());
        }

        if mode != MODE_RULES {
            let colors: Vec<String> = body
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .collect();
            return Ok(Self {
                mode: mode.to_owned(),
                colors: if colors.is_empty() {
                    SchemeColors::None
                } else {
                    SchemeColors::Sequence(colors)
                },
                rules: Vec::new(),
            });
        }

        let mut rules = Vec::new();
        let mut keys: Vec<(String, String)> = Vec::new();
        for part in body.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let rule = parse_rule(part).ok_or_else(syntax)?;
            if !keys.iter().any(|(k, _)| *k == rule.key) {
                keys.push((rule.key.clone(), rule.key.clone()));
            }
            rules.push(rule);
        }
        if rules.is_empty() {
            return Err(syntax());
        }
        Ok(Self {
            mode: MODE_RULES.to_owned(),
            colors: SchemeColors::Keyed(keys),
            rules,
        })
    }
}

/// `OP THRESHOLD=COLOR` or `else=COLOR`.
fn parse_rule(part: &str) -> Option<RuleSpec> {
    if let Some(rest) = part.strip_prefix(ELSE) {
        let color = rest.trim_start().strip_prefix('=')?.trim();
        return (!color.is_empty()).then(|| RuleSpec::otherwise(color));
    }
    let op_len = part
        .find(|c: char| !matches!(c, '<' | '>' | '=' | '!'))
        .unwrap_or(part.len());
    let (op, rest) = part.split_at(op_len);
    let (threshold, color) = rest.split_once('=')?;
    let threshold = lexical_core::parse::<f64>(threshold.trim().as_bytes()).ok()?;
    let color = color.trim();
    if op.is_empty() || color.is_empty() {
        return None;
    }
    Some(RuleSpec::compare(op, threshold, color))
}

/// A scheme named in a [`Catalog`], or spelled out inline.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemeRef {
    Named(String),
    Inline(SchemeDescriptor),
}

impl Default for SchemeRef {
    fn default() -> Self {
        Self::Named(MODE_MONO.to_owned())
    }
}

impl From<&str> for SchemeRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for SchemeRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<SchemeDescriptor> for SchemeRef {
    fn from(d: SchemeDescriptor) -> Self {
        Self::Inline(d)
    }
}

impl FromStr for SchemeRef {
    type Err = SchemeError;

    /// Bare words are catalog names; anything with a `:` is an inline descriptor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse().map(Self::Inline)
        } else if s.trim().is_empty() {
            Err(SchemeError::Syntax(s.to_owned()))
        } else {
            Ok(Self::Named(s.trim().to_owned()))
        }
    }
}

/// Immutable name → descriptor table.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<(String, SchemeDescriptor)>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in schemes: `mono`, `rotate_16`, `rotate_256`,
    /// `rotate_true` and `signed`.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::new()
                .with("mono", SchemeDescriptor::mono())
                .with("rotate_16", SchemeDescriptor::rotate(DISTINCT_COLORS_16))
                .with("rotate_256", SchemeDescriptor::rotate(DISTINCT_COLORS_256))
                .with("rotate_true", SchemeDescriptor::rotate(DISTINCT_COLORS_TRUE))
                .with(
                    "signed",
                    SchemeDescriptor::rules(
                        [
                            ("nonnegative", SIGNED_NONNEGATIVE),
                            ("negative", SIGNED_NEGATIVE),
                        ],
                        vec![
                            RuleSpec::compare("<", 0.0, "negative"),
                            RuleSpec::otherwise("nonnegative"),
                        ],
                    ),
                )
        })
    }

    /// Add (or replace) a named scheme.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, scheme: SchemeDescriptor) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = scheme,
            None => self.entries.push((name, scheme)),
        }
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemeDescriptor> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemeDescriptor)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Look up / validate a scheme reference.
    pub fn resolve(&self, scheme: &SchemeRef) -> Result<ColorScheme, SchemeError> {
        match scheme {
            SchemeRef::Named(name) => self
                .get(name)
                .ok_or_else(|| SchemeError::UnknownScheme(name.clone()))
                .and_then(ColorScheme::from_descriptor),
            SchemeRef::Inline(descriptor) => ColorScheme::from_descriptor(descriptor),
        }
    }
}

/// A validated scheme; hand out a fresh [`ColorSource`] per render call.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScheme {
    Mono,
    Rotate(Vec<String>),
    Rules(RuleSet),
}

impl ColorScheme {
    pub fn from_descriptor(d: &SchemeDescriptor) -> Result<Self, SchemeError> {
        match d.mode.as_str() {
            MODE_MONO => Ok(Self::Mono),
            MODE_ROTATE => {
                let colors: Vec<String> = match &d.colors {
                    SchemeColors::None => Vec::new(),
                    SchemeColors::Sequence(c) => c.clone(),
                    SchemeColors::Keyed(c) => c.iter().map(|(_, v)| v.clone()).collect(),
                };
                if colors.is_empty() {
                    return Err(SchemeError::EmptyRotation);
                }
                Ok(Self::Rotate(colors))
            }
            MODE_RULES => {
                let palette: Vec<(String, String)> = match &d.colors {
                    SchemeColors::None => Vec::new(),
                    SchemeColors::Sequence(c) => c.iter().map(|v| (v.clone(), v.clone())).collect(),
                    SchemeColors::Keyed(c) => c.clone(),
                };
                let rules = d
                    .rules
                    .iter()
                    .map(|r| Ok((r.condition()?, r.key.clone())))
                    .collect::<Result<Vec<_>, SchemeError>>()?;
                RuleSet::new(rules, &palette).map(Self::Rules)
            }
            other => Err(SchemeError::UnknownMode(other.to_owned())),
        }
    }

    /// Fresh colour source with its cursor at the first colour.
    #[must_use]
    pub fn source(&self) -> ColorSource<'_> {
        match self {
            Self::Mono => ColorSource::Mono,
            Self::Rotate(colors) => ColorSource::Cycle(Rotation::new(colors)),
            Self::Rules(rules) => ColorSource::Rules(rules),
        }
    }
}
