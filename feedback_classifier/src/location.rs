//! Resolution of free-text locations to a canonical country name.

use log::{debug, trace};
use regex::Regex;

use crate::config::*;
use crate::normalize::{fold_name, normalize_location, title_case};

/// Maps free-text answers such as `"Lagos, Nigeria"` or `"Keny"` to one of the
/// known countries.
///
/// The resolver never guesses: anything that does not match a table entry,
/// a known country or a close spelling of one is `Resolution::Unresolved`.
pub struct LocationResolver {
    tables: LocationTables,
    nigeria: Regex,
    // Longest names first, so that "South Sudan" is found before "Sudan".
    country_patterns: Vec<(Regex, &'static str)>,
    // Display names for the fuzzy pass, in table order.
    fuzzy_names: Vec<(Vec<char>, &'static str)>,
}

impl LocationResolver {
    pub fn new(tables: &LocationTables) -> Result<LocationResolver, ClassifierErrors> {
        let mut by_length: Vec<&'static str> = tables.known_countries.to_vec();
        // Stable: equal lengths keep the table order.
        by_length.sort_by_key(|c| std::cmp::Reverse(c.chars().count()));

        let mut country_patterns: Vec<(Regex, &'static str)> = Vec::new();
        for country in by_length {
            let re = word_pattern(&fold_name(country))
                .map_err(|_| ClassifierErrors::InvalidCountryPattern(country.to_string()))?;
            country_patterns.push((re, country));
        }

        let nigeria = word_pattern("nigeria")
            .map_err(|_| ClassifierErrors::InvalidCountryPattern("Nigeria".to_string()))?;

        let fuzzy_names = tables
            .known_countries
            .iter()
            .map(|c| (c.chars().collect(), *c))
            .collect();

        Ok(LocationResolver {
            tables: *tables,
            nigeria,
            country_patterns,
            fuzzy_names,
        })
    }

    /// Resolves one raw answer of the country question.
    pub fn resolve(&self, raw: &str) -> Resolution {
        let normalized = normalize_location(raw);
        if normalized.is_empty() {
            return Resolution::Unresolved;
        }
        if self.is_noise(&normalized) {
            debug!("resolve: rejecting noise {:?}", raw);
            return Resolution::Unresolved;
        }
        let res = self.best_match(last_segment(&normalized));
        trace!("resolve: {:?} -> {:?}", raw, res);
        res
    }

    fn is_noise(&self, normalized: &str) -> bool {
        self.tables.blacklist_exact.contains(&normalized)
            || self
                .tables
                .blacklist_substrings
                .iter()
                .any(|bad| normalized.contains(bad))
    }

    fn best_match(&self, text: &str) -> Resolution {
        if text.is_empty() {
            return Resolution::Unresolved;
        }
        if let Some(c) = lookup(self.tables.cities, text) {
            return Resolution::Country(c);
        }
        if let Some(c) = lookup(self.tables.aliases, text) {
            return Resolution::Country(c);
        }
        // "Niger" is a prefix of "Nigeria": settle it first.
        if self.nigeria.is_match(text) {
            return Resolution::Country("Nigeria");
        }
        if let Some((_, c)) = self.country_patterns.iter().find(|(re, _)| re.is_match(text)) {
            return Resolution::Country(c);
        }
        if let Some(c) = self.closest_country(text) {
            debug!("resolve: fuzzy match {:?} -> {}", text, c);
            return Resolution::Country(c);
        }
        self.tables
            .cities
            .iter()
            .find(|(city, _)| text.contains(city))
            .map(|(_, c)| Resolution::Country(c))
            .unwrap_or(Resolution::Unresolved)
    }

    // Compared in title case against the display names, so that a capital
    // only matches at the start of a word.
    fn closest_country(&self, text: &str) -> Option<&'static str> {
        let titled: Vec<char> = title_case(text).chars().collect();
        let mut best: Option<(f64, &'static str)> = None;
        for (name, country) in self.fuzzy_names.iter() {
            let sim = match_ratio(name, &titled);
            if sim < self.tables.fuzzy_cutoff {
                continue;
            }
            match best {
                Some((best_sim, _)) if best_sim >= sim => {}
                _ => best = Some((sim, country)),
            }
        }
        best.map(|(_, c)| c)
    }
}

/// Ratcliff/Obershelp similarity: twice the number of characters in common
/// blocks, over the total length of both strings.
///
/// The common blocks are found by taking the longest run of equal characters
/// (leftmost in `a`, then leftmost in `b`) and recursing on both sides of it.
fn match_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(a, b) as f64 / total as f64
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, k) = longest_block(a, b);
    if k == 0 {
        return 0;
    }
    k + matched_chars(&a[..i], &b[..j]) + matched_chars(&a[i + k..], &b[j + k..])
}

// (start in a, start in b, length)
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut cur = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let k = prev[j] + 1;
                cur[j + 1] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        prev = cur;
    }
    best
}

fn word_pattern(word: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(word)))
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

// "City, Country" answers: the country is usually the last part.
fn last_segment(normalized: &str) -> &str {
    if !normalized.contains(',') {
        return normalized;
    }
    normalized
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .last()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LocationResolver {
        let _ = env_logger::builder().is_test(true).try_init();
        LocationResolver::new(&LocationTables::STANDARD).unwrap()
    }

    fn resolve(s: &str) -> Option<&'static str> {
        resolver().resolve(s).country()
    }

    #[test]
    fn city_and_country() {
        assert_eq!(resolve("Lagos, Nigeria"), Some("Nigeria"));
        assert_eq!(resolve("Cape Town , South Africa"), Some("South Africa"));
        assert_eq!(resolve("Nairobi"), Some("Kenya"));
        assert_eq!(resolve("Victoria Island, Lagos"), Some("Nigeria"));
        assert_eq!(resolve("Abidjan"), Some("Côte d'Ivoire"));
    }

    #[test]
    fn capitals_and_common_names() {
        assert_eq!(resolve("Luanda"), Some("Angola"));
        assert_eq!(resolve("Dakar, Senegal"), Some("Senegal"));
        assert_eq!(resolve("N'Djamena"), Some("Chad"));
        assert_eq!(resolve("Port Louis"), Some("Mauritius"));
        assert_eq!(resolve("Ivory Coast"), Some("Côte d'Ivoire"));
        assert_eq!(resolve("DRC"), Some("Democratic Republic of Congo"));
        assert_eq!(resolve("Swaziland"), Some("Eswatini"));
    }

    #[test]
    fn aliases() {
        assert_eq!(resolve("UAE"), Some("United Arab Emirates"));
        assert_eq!(resolve("uk"), Some("United Kingdom"));
        assert_eq!(resolve("U.S.A"), Some("United States"));
        assert_eq!(resolve("Cote d’Ivoire"), Some("Côte d'Ivoire"));
        assert_eq!(resolve("Keny"), Some("Kenya"));
    }

    #[test]
    fn niger_and_nigeria() {
        assert_eq!(resolve("Niger"), Some("Niger"));
        assert_eq!(resolve("Niamey, Niger"), Some("Niger"));
        assert_eq!(resolve("Nigeria"), Some("Nigeria"));
        assert_eq!(resolve("NIGERIA 🇳🇬"), Some("Nigeria"));
        assert_eq!(resolve("Federal Republic of Nigeria"), Some("Nigeria"));
    }

    #[test]
    fn longer_names_first() {
        assert_eq!(resolve("I live in South Sudan"), Some("South Sudan"));
        assert_eq!(resolve("Republic of Sudan"), Some("Sudan"));
        assert_eq!(resolve("Guinea-Bissau"), Some("Guinea-Bissau"));
        assert_eq!(resolve("Equatorial Guinea"), Some("Equatorial Guinea"));
        assert_eq!(
            resolve("The Democratic Republic of Congo"),
            Some("Democratic Republic of Congo")
        );
        assert_eq!(resolve("Somalia"), Some("Somalia"));
    }

    #[test]
    fn accents_are_restored() {
        assert_eq!(resolve("Côte d'Ivoire"), Some("Côte d'Ivoire"));
        assert_eq!(resolve("Turkiye"), Some("Türkiye"));
        assert_eq!(resolve("Yaoundé"), Some("Cameroon"));
    }

    #[test]
    fn noise_is_rejected() {
        assert_eq!(resolver().resolve("jobs@gmail.com"), Resolution::Unresolved);
        assert_eq!(
            resolver().resolve("Tourism and Hospitality"),
            Resolution::Unresolved
        );
        assert_eq!(resolve("Country"), None);
        assert_eq!(resolve("https://example.org"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("  ,  "), None);
        assert_eq!(resolve("🙂"), None);
        // Comoros must not be taken for a ".com" address.
        assert_eq!(resolve("Comoros"), Some("Comoros"));
    }

    #[test]
    fn fuzzy_matches_close_typos_only() {
        assert_eq!(resolve("Rwandaa"), Some("Rwanda"));
        assert_eq!(resolve("Ethiopa"), Some("Ethiopia"));
        assert_eq!(resolve("Xyzzyplonk"), None);
        assert_eq!(resolve("I am looking for a job"), None);
        assert_eq!(resolve("Remote"), None);
    }

    #[test]
    fn fuzzy_matches_swapped_letters() {
        assert_eq!(resolve("Kneya"), Some("Kenya"));
        assert_eq!(resolve("Morroco"), Some("Morocco"));
        assert_eq!(resolve("Gahna"), Some("Ghana"));
        assert_eq!(resolve("Egpyt"), Some("Egypt"));
        assert_eq!(resolve("Ugnada"), Some("Uganda"));
        assert_eq!(resolve("Tanzanai"), Some("Tanzania"));
        assert_eq!(resolve("Guinea Bisau"), Some("Guinea-Bissau"));
        assert_eq!(resolve("south afrika"), Some("South Africa"));
        assert_eq!(resolve("Xyzzyplonk"), None);
        assert_eq!(resolve("I am looking for a job"), None);
        assert_eq!(resolve("Atlantis"), None);
    }

    #[test]
    fn ratio_of_common_blocks() {
        let chars = |s: &str| s.chars().collect::<Vec<char>>();
        assert_eq!(match_ratio(&chars(""), &chars("")), 1.0);
        assert_eq!(match_ratio(&chars("Ghana"), &chars("Ghana")), 1.0);
        assert_eq!(match_ratio(&chars("abc"), &chars("xyz")), 0.0);
        // Blocks "na", "G" and "h": 4 of 5 characters on each side.
        assert_eq!(match_ratio(&chars("Ghana"), &chars("Gahna")), 0.8);
        // Case matters: only "anda" is shared.
        assert!(match_ratio(&chars("Uganda"), &chars("Luanda")) < 0.8);
    }

    #[test]
    fn city_substring_is_last_resort() {
        assert_eq!(resolve("Greater Accra Region"), Some("Ghana"));
        assert_eq!(resolve("Lekki Lagos"), Some("Nigeria"));
    }

    #[test]
    fn unknown_sentinel() {
        assert_eq!(resolver().resolve("Atlantis").name_or_unknown(), "Unknown");
        assert_eq!(resolver().resolve("Ghana").name_or_unknown(), "Ghana");
    }
}
