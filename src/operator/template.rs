//! Format templates for rendering an operator applied to operands.
//!
//! A template is plain text with a few special codes. `n` is a 1-based
//! operand index and `x` any text without braces:
//!
//! - `{n}` is replaced with the *n*th operand, or nothing if it is missing.
//! - `{n|x}` is replaced with the *n*th operand, or `x` if it is missing.
//! - `{sup: x}` and `{sub: x}` wrap `x` in `<sup>`/`<sub>` tags. `x` may be a
//!   numbered code such as `{sup: {2}}`; operands are substituted first.
//!
//! Everything else is copied verbatim, so `"log{sub: 10}{1}"` applied to `16`
//! gives `"log<sub>10</sub>16"`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Operand codes: `{1}`, `{2|⛶}`.
    static ref OPERAND: Regex = Regex::new(r"\{(\d+)(?:\|([^{}]+))?\}").unwrap();

    /// Superscript and subscript codes, once operands have been substituted.
    static ref MARKUP: Regex = Regex::new(r"\{(sup|sub):\s?([^{}]*)\}").unwrap();
}

/// Expand `template` with the given operands.
///
/// Operands past the end of the slice count as missing. Expansion never
/// fails: codes with nothing to substitute collapse to their fallback or to
/// the empty string.
pub fn expand<S: AsRef<str>>(template: &str, operands: &[S]) -> String {
    let substituted = OPERAND.replace_all(template, |caps: &Captures| {
        let operand = caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| operands.get(i));

        match (operand, caps.get(2)) {
            (Some(value), _) => value.as_ref().to_string(),
            (None, Some(fallback)) => fallback.as_str().to_string(),
            (None, None) => String::new(),
        }
    });

    MARKUP
        .replace_all(&substituted, |caps: &Captures| {
            let tag = &caps[1];
            format!("<{tag}>{}</{tag}>", &caps[2])
        })
        .into_owned()
}

/// Operand indices referenced by `template`, in order of appearance.
///
/// Indices too large for `usize` are reported as `usize::MAX`.
pub fn operand_indices(template: &str) -> Vec<usize> {
    OPERAND
        .captures_iter(template)
        .map(|caps| caps[1].parse::<usize>().unwrap_or(usize::MAX))
        .collect()
}

/// The literal part of `template`, with every code removed and whitespace trimmed.
///
/// `"{1} + {2}"` gives `"+"` and `"√{1}"` gives `"√"`.
pub fn literal_text(template: &str) -> String {
    let without_operands = OPERAND.replace_all(template, "");
    MARKUP
        .replace_all(&without_operands, "")
        .trim()
        .to_string()
}
