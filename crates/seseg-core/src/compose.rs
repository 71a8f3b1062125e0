//! Class string composition — turns a list of [`ClassValue`]s into a single
//! space-separated token string.
//!
//! Composition has two layers:
//!
//! - **Aggregation** ([`Composer::compose`], [`seseg`]): skip falsy top-level
//!   arguments, produce a fragment for each remaining one, concatenate, then
//!   trim and collapse whitespace.
//! - **Production** (`Composer::produce`): classify one value by shape and
//!   emit its fragment. Scalars and mapping keys append their own trailing
//!   space; sequences and mappings only concatenate their children. The final
//!   whitespace pass turns that redundancy into single-space separation.
//!
//! # Example
//! ```
//! use seseg_core::{seseg, ClassMap, ClassValue};
//!
//! let mut flags = ClassMap::new();
//! flags.insert("active", true);
//! flags.insert("disabled", false);
//!
//! let out = seseg(&["btn".into(), ClassValue::Mapping(flags), ClassValue::Absent]);
//! assert_eq!(out, "btn active");
//! ```
//!
//! # Recursion
//!
//! Nested sequences are walked with an explicit work-list, so list depth does
//! not consume call stack. Mappings nested inside mappings (through reserved
//! keys) recurse normally; inputs with tens of thousands of such levels can
//! overflow the stack. Template-built class values never come close.

use crate::types::{ClassMap, ClassValue};
use tracing::trace;

/// Mapping keys whose values are expanded recursively instead of being used
/// as token names.
pub const DEFAULT_RESERVED_KEYS: [&str; 2] = ["class", "className"];

/// Compose class values into a normalized token string using the default
/// reserved keys.
///
/// Falsy arguments are skipped. Returns `""` when nothing contributes a token.
pub fn seseg(values: &[ClassValue]) -> String {
    Composer::default().compose(values)
}

pub use self::seseg as classes;

/// Trim `input` and collapse every run of whitespace into one ASCII space.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
pub fn normalize_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for token in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// A class composer with a configurable set of reserved keys.
///
/// `Composer::default()` behaves exactly like [`seseg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    reserved_keys: Vec<String>,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            reserved_keys: DEFAULT_RESERVED_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reserved key set. An empty set turns every mapping key into
    /// an ordinary token name.
    pub fn with_reserved_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn reserved_keys(&self) -> impl Iterator<Item = &str> {
        self.reserved_keys.iter().map(String::as_str)
    }

    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved_keys.iter().any(|k| k == key)
    }

    /// Compose `values` left to right into a normalized token string.
    pub fn compose(&self, values: &[ClassValue]) -> String {
        let mut raw = String::new();
        for value in values {
            if value.is_truthy() {
                self.produce(value, &mut raw);
            }
        }

        let out = normalize_whitespace(&raw);
        trace!(
            arguments = values.len(),
            raw_len = raw.len(),
            len = out.len(),
            "composed class string"
        );
        out
    }

    /// Append the fragment for one value to `out`.
    fn produce(&self, value: &ClassValue, out: &mut String) {
        match classify(value) {
            Shape::Empty => {}
            Shape::Sequence(items) => {
                for item in Flatten::new(items) {
                    if item.is_truthy() {
                        self.produce(item, out);
                    }
                }
            }
            Shape::Mapping(map) => self.produce_mapping(map, out),
            Shape::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Shape::Number(n) => {
                out.push_str(&format_number(n));
                out.push(' ');
            }
        }
    }

    /// Keys are plain strings compared by value, so names like `push` or
    /// `length` are never mistaken for anything but tokens.
    fn produce_mapping(&self, map: &ClassMap, out: &mut String) {
        for (key, value) in map.iter() {
            if self.is_reserved(key) {
                self.produce(value, out);
            } else if value.is_truthy() && !value.is_ignorable() {
                out.push_str(key);
                out.push(' ');
            }
        }
    }
}

/// The shape of a value as far as production is concerned.
enum Shape<'a> {
    Empty,
    Sequence(&'a [ClassValue]),
    Mapping(&'a ClassMap),
    Text(&'a str),
    Number(f64),
}

fn classify(value: &ClassValue) -> Shape<'_> {
    match value {
        ClassValue::Bool(_) | ClassValue::Ignorable => Shape::Empty,
        _ if !value.is_truthy() => Shape::Empty,
        ClassValue::Sequence(items) => Shape::Sequence(items),
        ClassValue::Mapping(map) => Shape::Mapping(map),
        ClassValue::Text(text) => Shape::Text(text),
        ClassValue::Number(n) => Shape::Number(*n),
        ClassValue::Absent => Shape::Empty,
    }
}

/// Depth-first iterator over the non-sequence leaves of a sequence.
///
/// Equivalent to flattening every nesting level up front, without building
/// the flattened list.
struct Flatten<'a> {
    stack: Vec<std::slice::Iter<'a, ClassValue>>,
}

impl<'a> Flatten<'a> {
    fn new(items: &'a [ClassValue]) -> Self {
        Self {
            stack: vec![items.iter()],
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a ClassValue;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(ClassValue::Sequence(inner)) => self.stack.push(inner.iter()),
                Some(leaf) => return Some(leaf),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Render a number the way a JavaScript template would print it:
/// - Integral values have no fractional part (`1`, not `1.0`)
/// - Magnitudes `>= 1e21` or `< 1e-6` use exponent form with a signed
///   exponent (`1e+21`, `1.5e-7`)
/// - Infinities render as `Infinity` / `-Infinity`
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => s,
        };
    }
    format!("{n}")
}
