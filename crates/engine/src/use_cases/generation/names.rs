//! Name uniqueness resolution
//!
//! World names must not collide with the caller's existing set. Collisions
//! are resolved by deterministic numeric suffixing, never by regeneration.

use std::collections::HashSet;

/// Resolve a candidate name against a set of existing names.
///
/// A non-colliding candidate is returned unchanged. Otherwise `"<name> <n>"`
/// is tried with n = 1, 2, ... until a free name is found.
pub fn resolve_unique_name(candidate: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(candidate) {
        return candidate.to_string();
    }

    let mut n = 1u32;
    loop {
        let attempt = format!("{candidate} {n}");
        if !existing.contains(&attempt) {
            return attempt;
        }
        n += 1;
    }
}
