//! Corner-radius extraction from style text.
//!
//! Widgets carry free-form style text (and the application carries a global
//! sheet); the overlay clip only needs one fact out of them: the
//! `border-radius` that applies to the widget's rendered box. Rather than a
//! full stylesheet engine, this is a textual scan for radius declarations.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a `border-radius: <int>` declaration; unit suffixes are ignored.
fn radius_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"border-radius\s*:\s*([0-9]+)").expect("radius pattern is valid")
    })
}

/// Extract the corner radius (in pixels) that applies from the given style
/// sources.
///
/// Sources are consulted in order (most specific first — typically the
/// widget's own style text, then the application-wide sheet). The first
/// source containing any declaration decides the result; within a source the
/// last declaration wins, matching cascade behavior where later rules
/// override earlier ones. No declaration anywhere yields `0`.
pub fn border_radius<'a>(sources: impl IntoIterator<Item = &'a str>) -> u32 {
    let pattern = radius_pattern();

    for source in sources {
        let last = pattern
            .captures_iter(source)
            .filter_map(|caps| caps[1].parse::<u32>().ok())
            .last();
        if let Some(radius) = last {
            return radius;
        }
    }

    0
}
