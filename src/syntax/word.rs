static KEYWORDS: [&str; 7] = ["function", "var", "return", "let", "const", "if", "for"];

pub trait LexWord {
    fn is_keyword(&self) -> bool;
}

impl LexWord for str {
    /// Whole-word match, ignoring ASCII case.
    fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(self))
    }
}

#[cfg(test)]
mod tests {
    use super::LexWord;

    #[test]
    fn whole_words_only() {
        assert!("let".is_keyword());
        assert!("for".is_keyword());
        assert!(!"variant".is_keyword());
        assert!(!"format".is_keyword());
        assert!(!"lets".is_keyword());
    }

    #[test]
    fn case_is_ignored() {
        assert!("LET".is_keyword());
        assert!("Var".is_keyword());
        assert!("fUnCtIoN".is_keyword());
        assert!(!"VARIANT".is_keyword());
    }
}
