//! Class-name composition.

/// Builds a space-separated class string, skipping empty tokens and
/// tokens whose flag is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    tokens: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token unconditionally. Whitespace-only tokens are dropped.
    pub fn push(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        if !token.is_empty() {
            self.tokens.push(token.to_string());
        }
        self
    }

    /// Add `token` only when `flag` is set.
    pub fn key_only(self, flag: bool, token: &str) -> Self {
        if flag {
            self.push(token)
        } else {
            self
        }
    }

    pub fn maybe(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.push(token),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn build(self) -> String {
        self.tokens.join(" ")
    }
}
