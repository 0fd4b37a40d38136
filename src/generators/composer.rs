// src/generators/composer.rs

use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::WordCatalog;

/// Special characters eligible for the one-character entropy slot.
pub const SPECIAL_CHARS: &[u8] = b"!@#$%&*_-+=?";

/// Digits appended after the special character.
pub const DIGIT_COUNT: usize = 4;

/// Reserved characters at the end of every password: 1 special + 4 digits.
pub const SUFFIX_LEN: usize = 1 + DIGIT_COUNT;

// Words shorter than this are never picked mid-composition, even though the
// catalog contains them.
const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 10;

// At most 4 words in the primary selection loop; the padding loop checks
// against 6.
const MAX_PRIMARY_WORDS: usize = 4;
const MAX_TOTAL_WORDS: usize = 6;

// Above this much remaining budget, a coin flip may force the longest
// available word instead of a uniform pick.
const LONG_WORD_BIAS_THRESHOLD: usize = 6;

/// Composes human-readable passwords from catalog words plus a fixed
/// entropy suffix.
///
/// Every call is independent and touches no shared mutable state, so one
/// composer can serve concurrent callers.
pub struct PasswordComposer<'a> {
    catalog: &'a WordCatalog,
}

impl PasswordComposer<'static> {
    pub fn new() -> Self {
        PasswordComposer {
            catalog: WordCatalog::global(),
        }
    }
}

impl Default for PasswordComposer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PasswordComposer<'a> {
    #[cfg(test)]
    fn with_catalog(catalog: &'a WordCatalog) -> Self {
        PasswordComposer { catalog }
    }

    /// Generate a password of approximately `requested` characters using the
    /// thread-local RNG.
    ///
    /// Never fails: out-of-policy lengths degrade to a shorter-than-requested
    /// result rather than an error. Length policy (8-50) belongs to the
    /// calling layer.
    pub fn generate_password(&self, requested: usize) -> String {
        self.compose(&mut rand::thread_rng(), requested)
    }

    /// Like [`generate_password`], but with an injected randomness source so
    /// callers can substitute a seeded generator.
    ///
    /// [`generate_password`]: Self::generate_password
    pub fn compose<R: Rng>(&self, rng: &mut R, requested: usize) -> String {
        // Budget for word fragments; the suffix takes the other 5 chars.
        let target_word_len = requested.saturating_sub(SUFFIX_LEN);

        let mut fragments: Vec<String> = Vec::new();
        let mut current_len = 0usize;

        while current_len < target_word_len && fragments.len() < MAX_PRIMARY_WORDS {
            let remaining = target_word_len - current_len;
            if remaining < MIN_WORD_LEN {
                break;
            }

            let word = match self.pick_word(rng, remaining) {
                Some(word) => word,
                None => break,
            };

            current_len += word.len();
            fragments.push(capitalize(word));
        }

        let mut password: String = fragments.concat();

        password.push(SPECIAL_CHARS[rng.gen_range(0..SPECIAL_CHARS.len())] as char);
        for _ in 0..DIGIT_COUNT {
            password.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }

        // Padding words are appended to the assembled string only, never to
        // `fragments`: truncation below sees just the primary words.
        while password.len() + 2 < requested && fragments.len() < MAX_TOTAL_WORDS {
            let remaining = (requested - password.len()).saturating_sub(SUFFIX_LEN);
            if remaining < MIN_WORD_LEN {
                break;
            }

            let candidates: Vec<&str> = self
                .catalog
                .all_words()
                .iter()
                .copied()
                .filter(|w| (MIN_WORD_LEN..=remaining).contains(&w.len()))
                .collect();

            match candidates.choose(rng) {
                Some(word) => password.push_str(&capitalize(word)),
                None => break,
            }
        }

        fit_to_length(fragments, password, requested)
    }

    /// One word fitting into `remaining` characters, or `None` when nothing
    /// fits (a normal early-exit, not an error).
    fn pick_word<R: Rng>(&self, rng: &mut R, remaining: usize) -> Option<&'a str> {
        let available: Vec<usize> = (MIN_WORD_LEN..=remaining.min(MAX_WORD_LEN))
            .filter(|&len| !self.catalog.words_of_length(len).is_empty())
            .collect();

        if let Some(&max_len) = available.last() {
            // Favor long words when there is room, on an unbiased coin.
            let len = if remaining > LONG_WORD_BIAS_THRESHOLD && rng.gen_bool(0.5) {
                max_len
            } else {
                *available.choose(rng)?
            };
            self.catalog.words_of_length(len).choose(rng).copied()
        } else {
            self.catalog.words_up_to(remaining).choose(rng).copied()
        }
    }
}

/// First character upper, rest lower.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Length-correction pass over the assembled password.
///
/// `fragments` holds the primary words only; the last 5 characters of
/// `password` are the special character and digits unless a hard truncation
/// cuts into them.
fn fit_to_length(mut fragments: Vec<String>, mut password: String, requested: usize) -> String {
    if password.len() <= requested {
        return password;
    }

    let suffix = password[password.len() - SUFFIX_LEN..].to_string();
    let word_portion: String = fragments.concat();

    if word_portion.len() + SUFFIX_LEN <= requested {
        // Keep every word and the original suffix.
        word_portion + &suffix
    } else if fragments.len() > 1 {
        let excess = password.len() - requested;
        if let Some(last) = fragments.last_mut() {
            if last.len() > excess + 2 {
                let keep = last.len() - excess;
                last.truncate(keep);
            } else {
                fragments.pop();
            }
        }
        fragments.concat() + &suffix
    } else {
        // Zero or one fragment: hard cut, possibly into the suffix.
        password.truncate(requested);
        password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn compose(seed: u64, requested: usize) -> String {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        PasswordComposer::new().compose(&mut rng, requested)
    }

    fn is_special(c: char) -> bool {
        SPECIAL_CHARS.contains(&(c as u8))
    }

    #[test]
    fn test_never_longer_than_requested() {
        for seed in 0..50 {
            for requested in 0..=60 {
                let password = compose(seed, requested);
                assert!(
                    password.len() <= requested,
                    "len {} > requested {} (seed {}): {:?}",
                    password.len(),
                    requested,
                    seed,
                    password
                );
            }
        }
    }

    #[test]
    fn test_contains_required_character_classes() {
        for seed in 0..50 {
            for requested in 8..=50 {
                let password = compose(seed, requested);
                assert!(
                    password.chars().any(|c| c.is_ascii_uppercase()),
                    "no uppercase in {:?}",
                    password
                );
                assert!(
                    password.chars().any(|c| c.is_ascii_digit()),
                    "no digit in {:?}",
                    password
                );
                assert!(
                    password.chars().any(is_special),
                    "no special char in {:?}",
                    password
                );
            }
        }
    }

    #[test]
    fn test_shortfall_is_bounded() {
        // Words cannot always fill the budget exactly; the worst case is the
        // top of the range, where the 4-word cap plus the padding loop's own
        // suffix reservation leave up to 7 characters unfilled.
        for seed in 0..50 {
            for requested in 8..=50 {
                let password = compose(seed, requested);
                assert!(
                    password.len() + 7 >= requested,
                    "len {} too far below requested {} (seed {})",
                    password.len(),
                    requested,
                    seed
                );
            }
            for requested in 8..=19 {
                let password = compose(seed, requested);
                assert!(
                    password.len() + 2 >= requested,
                    "len {} below requested {} - 2 (seed {})",
                    password.len(),
                    requested,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_untruncated_shape() {
        // Words, one special char, four digits, then optional padding words.
        for seed in 0..50 {
            for requested in 8..=50 {
                let password = compose(seed, requested);
                let special_at = password
                    .chars()
                    .position(is_special)
                    .unwrap_or_else(|| panic!("no special char in {:?}", password));

                assert!(special_at >= 1, "no word portion in {:?}", password);

                let head: Vec<char> = password.chars().collect();
                assert!(
                    head[..special_at].iter().all(|c| c.is_ascii_alphabetic()),
                    "non-letter before special char in {:?}",
                    password
                );
                assert!(
                    head[special_at + 1..special_at + 1 + DIGIT_COUNT]
                        .iter()
                        .all(|c| c.is_ascii_digit()),
                    "expected 4 digits after special char in {:?}",
                    password
                );
                assert!(
                    head[special_at + 1 + DIGIT_COUNT..]
                        .iter()
                        .all(|c| c.is_ascii_alphabetic()),
                    "non-letter padding in {:?}",
                    password
                );
            }
        }
    }

    #[test]
    fn test_word_portion_starts_capitalized() {
        for seed in 0..50 {
            let password = compose(seed, 16);
            let first = password.chars().next().unwrap();
            assert!(
                first.is_ascii_uppercase(),
                "password does not start with a capitalized word: {:?}",
                password
            );
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        for requested in [8, 16, 30, 50] {
            assert_eq!(compose(7, requested), compose(7, requested));
        }
    }

    #[test]
    fn test_tiny_lengths_degrade_without_panic() {
        for seed in 0..20 {
            for requested in 0..=5 {
                let password = compose(seed, requested);
                // Below 6 there is no room for words; the suffix alone is
                // truncated down to the request.
                assert_eq!(password.len(), requested);
            }
        }
    }

    #[test]
    fn test_length_zero_is_empty() {
        assert_eq!(compose(1, 0), "");
    }

    #[test]
    fn test_fit_noop_when_within_budget() {
        let fragments = vec!["Mountain".to_string()];
        let password = "Mountain!1234".to_string();
        assert_eq!(fit_to_length(fragments, password.clone(), 16), password);
    }

    #[test]
    fn test_fit_trims_last_fragment() {
        let fragments = vec!["Mountain".to_string(), "Keyboard".to_string()];
        // 16 letters + 5 suffix = 21, three over budget.
        let password = "MountainKeyboard!1234".to_string();
        let fitted = fit_to_length(fragments, password, 18);
        assert_eq!(fitted, "MountainKeybo!1234");
    }

    #[test]
    fn test_fit_drops_last_fragment_when_too_short_to_trim() {
        let fragments = vec!["Mountain".to_string(), "Day".to_string()];
        // Excess of 2 would leave "Day" with only 1 char, so it is dropped.
        let password = "MountainDay!1234".to_string();
        let fitted = fit_to_length(fragments, password, 14);
        assert_eq!(fitted, "Mountain!1234");
    }

    #[test]
    fn test_fit_keeps_words_and_suffix_when_they_fit() {
        let fragments = vec!["Day".to_string()];
        // Assembled string is over budget but fragments + suffix are not.
        let password = "DayExtraExtra!1234".to_string();
        let fitted = fit_to_length(fragments, password, 10);
        assert_eq!(fitted, "Day!1234");
    }

    #[test]
    fn test_fit_hard_truncates_single_fragment() {
        let fragments = vec!["Technology".to_string()];
        let password = "Technology!1234".to_string();
        let fitted = fit_to_length(fragments, password, 12);
        assert_eq!(fitted, "Technology!1");
    }

    #[test]
    fn test_fit_hard_truncates_suffix_only() {
        let fitted = fit_to_length(Vec::new(), "!1234".to_string(), 3);
        assert_eq!(fitted, "!12");
    }

    #[test]
    fn test_sparse_catalog_falls_back_to_short_words() {
        // A catalog with nothing in the 3..=10 buckets forces the
        // words-up-to fallback.
        let catalog = WordCatalog::for_tests("ab\nme\nto\n");
        let composer = PasswordComposer::with_catalog(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let password = composer.compose(&mut rng, 12);

        assert!(password.len() <= 12);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(is_special));
    }

    #[test]
    fn test_empty_catalog_yields_suffix_only() {
        let catalog = WordCatalog::for_tests("");
        let composer = PasswordComposer::with_catalog(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let password = composer.compose(&mut rng, 12);

        // No word fits anywhere: the suffix is all that remains.
        assert_eq!(password.len(), SUFFIX_LEN);
        assert!(is_special(password.chars().next().unwrap()));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mountain"), "Mountain");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }
}
