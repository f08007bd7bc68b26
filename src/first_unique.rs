//! First non-repeating character of a string, ignoring case.

use std::collections::HashMap;

/// Return the first character of `input` (lowercased) that occurs exactly
/// once, comparing case-insensitively. `None` when every character repeats
/// or the input is empty.
///
/// ```
/// use gridword::first_unique::find_first_non_repeating;
///
/// assert_eq!(find_first_non_repeating("EntwicklerHeld"), Some('n'));
/// assert_eq!(find_first_non_repeating("abcabc"), None);
/// ```
#[must_use]
pub fn find_first_non_repeating(input: &str) -> Option<char> {
    let lowered = input.to_lowercase();

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in lowered.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    lowered.chars().find(|c| counts.get(c) == Some(&1))
}
