//! Weighted prompt tags.
//!
//! A [`TagAtom`] is the structured form of one comma-separated entry of a
//! prompt such as `(masterpiece:1.2)`. It carries two independent weights:
//!
//! - a numeric weight written as a `:value` suffix (default `1.0`)
//! - a bracket weight counting emphasis `(...)` pairs minus de-emphasis
//!   `[...]` pairs (default `0`)
//!
//! Atoms are plain values. Lists of atoms keep the order of appearance in
//! the source text and are never mutated by the serializer.

use serde::{Deserialize, Serialize};

/// Numeric weight of a tag written without a `:value` suffix.
pub const DEFAULT_NUM_WEIGHT: f64 = 1.0;

/// Default display length used by [`TagAtom::short_name`] callers.
pub const SHORT_NAME_LEN: usize = 16;

const OMISSION: &str = "...";

/// Number of decimal places kept by step adjustments of the numeric weight.
const WEIGHT_SCALE: f64 = 10_000.0;

/// A single tag with its numeric and bracket weights.
///
/// # Examples
///
/// ```
/// use promptag_core::TagAtom;
///
/// let atom = TagAtom::new("masterpiece")
///     .with_num_weight(1.2)
///     .with_bracket_weight(1);
///
/// assert_eq!(atom.name(), "masterpiece");
/// assert_eq!(atom.bracket_weight(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAtom {
    name: String,
    #[serde(default = "default_num_weight")]
    num_weight: f64,
    #[serde(default)]
    bracket_weight: i32,
}

fn default_num_weight() -> f64 {
    DEFAULT_NUM_WEIGHT
}

impl TagAtom {
    /// Create an atom with default weights.
    ///
    /// Surrounding whitespace is removed from `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        let name = if trimmed.len() == name.len() {
            name
        } else {
            trimmed.to_string()
        };

        Self {
            name,
            num_weight: DEFAULT_NUM_WEIGHT,
            bracket_weight: 0,
        }
    }

    /// Set the numeric weight.
    pub fn with_num_weight(mut self, num_weight: f64) -> Self {
        self.num_weight = num_weight;
        self
    }

    /// Set the bracket weight.
    pub fn with_bracket_weight(mut self, bracket_weight: i32) -> Self {
        self.bracket_weight = bracket_weight;
        self
    }

    /// Get the tag text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the numeric weight.
    pub fn num_weight(&self) -> f64 {
        self.num_weight
    }

    /// Get the bracket weight.
    pub fn bracket_weight(&self) -> i32 {
        self.bracket_weight
    }

    /// Returns `true` if the numeric weight equals [`DEFAULT_NUM_WEIGHT`].
    pub fn has_default_num_weight(&self) -> bool {
        self.num_weight == DEFAULT_NUM_WEIGHT
    }

    /// Returns `true` if this atom can be written out and read back unchanged.
    ///
    /// A valid atom has a non-empty name without surrounding whitespace or
    /// line breaks, and a finite numeric weight.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self.name.trim().len() == self.name.len()
            && !self.name.contains(['\n', '\r'])
            && self.num_weight.is_finite()
    }

    /// Shift the bracket weight by `delta`.
    ///
    /// Used when an enclosing bracket group is applied to the atom.
    pub fn shift_bracket_weight(&mut self, delta: i32) {
        self.bracket_weight = self.bracket_weight.saturating_add(delta);
    }

    /// Wrap the atom in one more pair of `(...)`.
    pub fn emphasize(&mut self) {
        self.shift_bracket_weight(1);
    }

    /// Wrap the atom in one more pair of `[...]`, or drop one `(...)` pair.
    pub fn deemphasize(&mut self) {
        self.shift_bracket_weight(-1);
    }

    /// Raise the numeric weight by `step`.
    ///
    /// The result is rounded to four decimal places.
    pub fn increase_num_weight(&mut self, step: f64) {
        self.num_weight = round_weight(self.num_weight + step);
    }

    /// Lower the numeric weight by `step`.
    ///
    /// The result is rounded to four decimal places.
    pub fn decrease_num_weight(&mut self, step: f64) {
        self.num_weight = round_weight(self.num_weight - step);
    }

    /// A display label of at most `max_chars` characters.
    ///
    /// Longer names are cut and end with `...`.
    ///
    /// ```
    /// use promptag_core::{TagAtom, atom::SHORT_NAME_LEN};
    ///
    /// let atom = TagAtom::new("extremely detailed background");
    /// assert_eq!(atom.short_name(SHORT_NAME_LEN), "extremely det...");
    /// ```
    pub fn short_name(&self, max_chars: usize) -> String {
        if self.name.chars().count() <= max_chars {
            return self.name.clone();
        }

        let keep = max_chars.saturating_sub(OMISSION.len());
        let mut short: String = self.name.chars().take(keep).collect();
        short.push_str(OMISSION);
        short
    }
}

fn round_weight(weight: f64) -> f64 {
    (weight * WEIGHT_SCALE).round() / WEIGHT_SCALE
}
