//! Template Substitution Engine
//!
//! Fills `{token}` placeholders in a randomly chosen template string from
//! per-token candidate lists. Each occurrence of a token is resolved
//! independently, so `{x} met {x}` can yield two different fills.
//!
//! Tokens absent from the token map are left verbatim in the output. That
//! is the documented fallback, not an error: catalogs are hand-written and
//! a missing word list should degrade to visible `{token}` text rather
//! than abort the render.

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::errors::TemplateError;

/// A set of templates plus the word lists that fill their placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateSet {
    /// Candidate templates; one is chosen uniformly per render.
    pub templates: Vec<String>,

    /// Token name -> candidate fill values.
    pub tokens: IndexMap<String, Vec<String>>,
}

impl TemplateSet {
    /// Create an empty template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template (builder style).
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.templates.push(template.into());
        self
    }

    /// Add a token word list (builder style).
    pub fn with_token(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.tokens
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the set: at least one template, and every token that is
    /// both referenced and present in the map has candidates.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.templates.is_empty() {
            return Err(TemplateError::EmptyTemplateSet);
        }
        for template in &self.templates {
            for token in referenced_tokens(template) {
                if let Some(values) = self.tokens.get(token) {
                    if values.is_empty() {
                        return Err(TemplateError::empty_token_list(token));
                    }
                }
            }
        }
        Ok(())
    }

    /// Render one finished string: choose a template uniformly at random
    /// and fill every placeholder with an independent uniform draw.
    ///
    /// Fresh randomness per call; nothing is cached across renders.
    pub fn render(&self, rng: &mut impl Rng) -> Result<String, TemplateError> {
        let template = self
            .templates
            .choose(rng)
            .ok_or(TemplateError::EmptyTemplateSet)?;
        self.fill(template, rng)
    }

    /// Fill `{token}` occurrences in one template left-to-right.
    fn fill(&self, template: &str, rng: &mut impl Rng) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    match self.tokens.get(name) {
                        Some(values) => {
                            let value = values
                                .choose(rng)
                                .ok_or_else(|| TemplateError::empty_token_list(name))?;
                            out.push_str(value);
                        }
                        // Unknown token: leave the literal text unchanged.
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[end + 1..];
                }
                // Unterminated brace: emit the tail verbatim.
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Token names referenced by a template, in order of appearance.
pub fn referenced_tokens(template: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                tokens.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    tokens
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_render_substitutes_known_tokens() {
        let set = TemplateSet::new()
            .with_template("The {role} walked into the {place}.")
            .with_token("role", ["detective", "baker"])
            .with_token("place", ["library"]);

        let out = set.render(&mut rng()).unwrap();
        assert!(!out.contains("{role}"));
        assert!(!out.contains("{place}"));
        assert!(out.ends_with("library."));
    }

    #[test]
    fn test_unknown_token_left_verbatim() {
        let set = TemplateSet::new()
            .with_template("{known} and {unknown}")
            .with_token("known", ["yes"]);

        let out = set.render(&mut rng()).unwrap();
        assert_eq!(out, "yes and {unknown}");
    }

    #[test]
    fn test_repeated_token_resolved_independently() {
        // Scenario: "{x} met {x}" with x in {Alice, Bob} -> any of the
        // four pairings, each occurrence drawn on its own.
        let set = TemplateSet::new()
            .with_template("{x} met {x}")
            .with_token("x", ["Alice", "Bob"]);

        let mut rng = rng();
        let expected = [
            "Alice met Alice",
            "Alice met Bob",
            "Bob met Alice",
            "Bob met Bob",
        ];
        let mut seen_mixed = false;
        for _ in 0..100 {
            let out = set.render(&mut rng).unwrap();
            assert!(expected.contains(&out.as_str()));
            if out == "Alice met Bob" || out == "Bob met Alice" {
                seen_mixed = true;
            }
        }
        // 100 renders with independent draws make a mixed pair all but
        // certain under this seed.
        assert!(seen_mixed);
    }

    #[test]
    fn test_empty_template_set_rejected() {
        let set = TemplateSet::new().with_token("x", ["a"]);
        assert!(matches!(
            set.render(&mut rng()),
            Err(TemplateError::EmptyTemplateSet)
        ));
        assert!(matches!(
            set.validate(),
            Err(TemplateError::EmptyTemplateSet)
        ));
    }

    #[test]
    fn test_empty_token_list_rejected() {
        let set = TemplateSet::new()
            .with_template("{x}")
            .with_token("x", Vec::<String>::new());
        assert!(matches!(
            set.render(&mut rng()),
            Err(TemplateError::EmptyTokenList { .. })
        ));
        assert!(matches!(
            set.validate(),
            Err(TemplateError::EmptyTokenList { .. })
        ));
    }

    #[test]
    fn test_unterminated_brace_verbatim() {
        let set = TemplateSet::new()
            .with_template("a {x} and {broken")
            .with_token("x", ["b"]);
        let out = set.render(&mut rng()).unwrap();
        assert_eq!(out, "a b and {broken");
    }

    #[test]
    fn test_template_without_tokens() {
        let set = TemplateSet::new().with_template("no placeholders here");
        assert_eq!(set.render(&mut rng()).unwrap(), "no placeholders here");
    }

    #[test]
    fn test_referenced_tokens() {
        assert_eq!(
            referenced_tokens("The {a} met the {b} near {a}"),
            vec!["a", "b", "a"]
        );
        assert!(referenced_tokens("plain text").is_empty());
        assert_eq!(referenced_tokens("{x} and {y"), vec!["x"]);
    }

    #[test]
    fn test_validate_ignores_unreferenced_empty_token() {
        // An empty word list is only an error when a template uses it.
        let set = TemplateSet::new()
            .with_template("{used}")
            .with_token("used", ["v"])
            .with_token("unused", Vec::<String>::new());
        assert!(set.validate().is_ok());
    }
}
