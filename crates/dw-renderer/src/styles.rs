//! Static CSS class registry.
//!
//! The registry is a fixed table known at compile time: one shell wrapper
//! class plus four alignment variants. There is no runtime registration —
//! every document gets the same rule set, which keeps bundle output
//! deterministic and removes any ordering ambiguity between documents.

use std::collections::BTreeMap;

use dw_model::Alignment;

const SHELL_CLASS: &str = "dw-shell";

/// Full class table: `(name, declaration)` pairs.
const CLASSES: &[(&str, &str)] = &[
    (SHELL_CLASS, "max-width:700px;margin:0 auto;padding:0 1rem;"),
    ("dw-align-center", "text-align:center;"),
    ("dw-align-justify", "text-align:justify;"),
    ("dw-align-left", "text-align:left;"),
    ("dw-align-right", "text-align:right;"),
];

/// Immutable lookup table of the named CSS classes used by the converter.
///
/// Constructed once and passed to the walker; holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleRegistry;

impl StyleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Class applied to the root wrapper of a rendered document body.
    #[must_use]
    pub fn shell_class(self) -> &'static str {
        SHELL_CLASS
    }

    /// Alignment class for a paragraph. Missing alignment defaults to
    /// justified.
    #[must_use]
    pub fn alignment_class(self, alignment: Option<Alignment>) -> &'static str {
        match alignment {
            Some(Alignment::Center) => "dw-align-center",
            Some(Alignment::Right) => "dw-align-right",
            Some(Alignment::Left) => "dw-align-left",
            Some(Alignment::Justify) | None => "dw-align-justify",
        }
    }

    /// Full rule table for bundle serialization.
    #[must_use]
    pub fn rules(self) -> BTreeMap<String, String> {
        CLASSES
            .iter()
            .map(|&(class, decl)| (class.to_owned(), decl.to_owned()))
            .collect()
    }
}
