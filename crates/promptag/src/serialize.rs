//! Serialization of atom lists back into prompt text.
//!
//! The output is the canonical form read by [`parse`](crate::parse): every
//! valid atom list survives a `serialize` / `parse` round trip unchanged.

use promptag_core::{SerializeMode, TagAtom, atom::DEFAULT_NUM_WEIGHT};

/// Characters written with a leading backslash inside tag names.
const ESCAPED: [char; 7] = [',', ':', '(', ')', '[', ']', '\\'];

/// Render atoms as prompt text.
///
/// Each atom is wrapped in `bracket_weight` pairs of `(...)`, or in
/// `|bracket_weight|` pairs of `[...]` when negative. A numeric weight other
/// than `1` is written as a `:weight` suffix inside the innermost bracket.
/// Atoms that are not [valid](TagAtom::is_valid) are skipped.
///
/// # Examples
///
/// ```
/// use promptag::{SerializeMode, TagAtom, serialize};
///
/// let atoms = vec![
///     TagAtom::new("masterpiece").with_num_weight(1.2).with_bracket_weight(1),
///     TagAtom::new("lowres").with_bracket_weight(-1),
/// ];
///
/// assert_eq!(
///     serialize(&atoms, SerializeMode::Zip),
///     "(masterpiece:1.2), [lowres]"
/// );
/// assert_eq!(
///     serialize(&atoms, SerializeMode::Split),
///     "(masterpiece:1.2),\n[lowres]"
/// );
/// ```
pub fn serialize(atoms: &[TagAtom], mode: SerializeMode) -> String {
    let mut output = String::new();

    for atom in atoms.iter().filter(|atom| atom.is_valid()) {
        if !output.is_empty() {
            output.push_str(mode.separator());
        }
        render_atom(&mut output, atom);
    }

    output
}

fn render_atom(output: &mut String, atom: &TagAtom) {
    let depth = atom.bracket_weight().unsigned_abs() as usize;
    let (open, close) = if atom.bracket_weight() < 0 {
        ('[', ']')
    } else {
        ('(', ')')
    };

    output.extend(std::iter::repeat_n(open, depth));
    push_escaped(output, atom.name());
    if atom.num_weight() != DEFAULT_NUM_WEIGHT {
        // Display is the shortest representation that reads back exactly
        output.push(':');
        output.push_str(&atom.num_weight().to_string());
    }
    output.extend(std::iter::repeat_n(close, depth));
}

fn push_escaped(output: &mut String, name: &str) {
    for c in name.chars() {
        if ESCAPED.contains(&c) {
            output.push('\\');
        }
        output.push(c);
    }
}
