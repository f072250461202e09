//! Front-end configuration.

/// Tunables shared by the lexer, include expansion and parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// The parser's top-level loop gives up after `iteration_factor * token_count` iterations.
    pub iteration_factor: usize,
    /// Maximum nesting of `Include` directives.
    pub max_include_depth: usize,
    /// Check literal assignments against the declared type of the target variable.
    pub check_literal_types: bool,
    /// Deepest nesting of statements and parenthesized groups the parser descends into.
    pub max_nesting: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            iteration_factor: 2,
            max_include_depth: 16,
            check_literal_types: true,
            max_nesting: 256,
        }
    }
}

impl FrontendConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration guard factor (clamped to at least 1).
    pub fn with_iteration_factor(mut self, factor: usize) -> Self {
        self.iteration_factor = factor.max(1);
        self
    }

    /// Set the maximum include nesting depth.
    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    /// Enable or disable literal/type compatibility checks.
    pub fn with_literal_type_checks(mut self, enabled: bool) -> Self {
        self.check_literal_types = enabled;
        self
    }

    /// Set the nesting limit (clamped to at least 1).
    pub fn with_max_nesting(mut self, depth: usize) -> Self {
        self.max_nesting = depth.max(1);
        self
    }

    /// Iteration budget for a token stream of `token_count` tokens.
    pub fn iteration_limit(&self, token_count: usize) -> usize {
        token_count.saturating_mul(self.iteration_factor).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_guard() {
        let config = FrontendConfig::default();
        assert_eq!(config.iteration_limit(10), 20);
        assert_eq!(config.max_include_depth, 16);
        assert!(config.check_literal_types);
        assert_eq!(config.max_nesting, 256);
    }

    #[test]
    fn builders_override_fields() {
        let config = FrontendConfig::new()
            .with_iteration_factor(0)
            .with_max_include_depth(2)
            .with_literal_type_checks(false)
            .with_max_nesting(0);
        assert_eq!(config.iteration_factor, 1);
        assert_eq!(config.max_include_depth, 2);
        assert!(!config.check_literal_types);
        assert_eq!(config.iteration_limit(0), 1);
        assert_eq!(config.max_nesting, 1);
    }
}
