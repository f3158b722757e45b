use regex::Regex;

/// Lower-cases a query and strips everything that is neither a word
/// character nor whitespace. Whitespace itself is left untouched.
///
/// `\w` here is Unicode-aware and includes combining marks, so a decomposed
/// "e\u{301}" keeps its accent instead of collapsing to "e".
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    punctuation: Regex,
}

impl QueryNormalizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            punctuation: Regex::new(r"[^\w\s]")?,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.punctuation.replace_all(&lowered, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        let normalizer = QueryNormalizer::new().unwrap();
        assert_eq!(
            normalizer.normalize("Do you have ANY open positions?!"),
            "do you have any open positions"
        );
        assert_eq!(normalizer.normalize("project's"), "projects");
    }

    #[test]
    fn keeps_whitespace_and_underscores() {
        let normalizer = QueryNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("a  b\tc_d"), "a  b\tc_d");
    }

    #[test]
    fn combining_marks_are_kept() {
        let normalizer = QueryNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("Cafe\u{301}!"), "cafe\u{301}");
        assert_eq!(normalizer.normalize("Ünïcödé ñ 日本語 😀"), "ünïcödé ñ 日本語 ");
    }

    #[test]
    fn punctuation_only_becomes_empty() {
        let normalizer = QueryNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("?!...,;"), "");
        assert_eq!(normalizer.normalize(""), "");
    }
}
