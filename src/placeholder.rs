// SPDX-License-Identifier: PMPL-1.0-or-later

//! Positional placeholder substitution.
//!
//! Each parameter replaces the first marker left in the text, in parameter
//! order. Parameter text is inserted literally (a `$` stays a `$`), but it
//! is part of the text the next parameter searches, so a marker inside an
//! earlier parameter is filled before any later marker.

/// Marker used in dictionary text unless configured otherwise.
pub const DEFAULT_MARKER: &str = "#";

/// Replace markers in `text` with `params`, one marker per parameter.
///
/// Surplus parameters are ignored; surplus markers are left as they are.
/// An empty marker disables substitution.
///
/// ```
/// use phrasebook::placeholder::substitute;
/// assert_eq!(substitute("# and #", "#", &["A", "B"]), "A and B");
/// assert_eq!(substitute("You owe #", "#", &["$5"]), "You owe $5");
/// assert_eq!(substitute("# # #", "#", &["1", "2"]), "1 2 #");
/// ```
pub fn substitute<P: AsRef<str>>(text: &str, marker: &str, params: &[P]) -> String {
    if marker.is_empty() || params.is_empty() {
        return text.to_string();
    }

    let mut out = text.to_string();
    for param in params {
        let Some(at) = out.find(marker) else {
            break;
        };
        out.replace_range(at..at + marker.len(), param.as_ref());
    }
    out
}

/// Number of markers in `text`.
pub fn count_markers(text: &str, marker: &str) -> usize {
    if marker.is_empty() {
        0
    } else {
        text.matches(marker).count()
    }
}
