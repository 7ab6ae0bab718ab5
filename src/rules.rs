//! Built-in registry of disallowed color-literal patterns.
//!
//! Each rule is a base regex plus an optional exception regex. The `regex`
//! crate has no lookaround, so "hsl( not followed by var(" is modeled as
//! base `hsla?\(` with exception `hsla?\(\s*var\(`: a base match counts
//! only when no exception match starts at the same offset.

use regex::Regex;

/// A single guard rule with its user-facing name and guidance message.
pub struct Rule {
    pub name: &'static str,
    pub message: &'static str,
    pattern: Regex,
    exception: Option<Regex>,
}

impl Rule {
    fn new(
        name: &'static str,
        message: &'static str,
        pattern: &str,
        exception: Option<&str>,
    ) -> Rule {
        Rule {
            name,
            message,
            pattern: Regex::new(pattern).expect("bad built-in pattern"),
            exception: exception.map(|e| Regex::new(e).expect("bad built-in exception")),
        }
    }

    /// True when `line` violates this rule.
    pub fn is_match(&self, line: &str) -> bool {
        let Some(exc) = &self.exception else {
            return self.pattern.is_match(line);
        };
        let allowed: Vec<usize> = exc.find_iter(line).map(|m| m.start()).collect();
        self.pattern
            .find_iter(line)
            .any(|m| !allowed.contains(&m.start()))
    }
}

/// Build the ordered rule registry. Compiled once at startup and never
/// mutated; registry order decides violation order on a multi-match line.
pub fn registry() -> Vec<Rule> {
    vec![
        Rule::new(
            "Hex color literal",
            "Replace hex literal with a semantic/alpha token.",
            r"(?i)#[0-9a-f]{3,8}\b",
            None,
        ),
        Rule::new(
            "rgb/rgba literal",
            "Replace rgb/rgba usage with tokens.",
            r"(?i)\brgba?\(",
            None,
        ),
        Rule::new(
            "hsl literal",
            "Use semantic tokens instead of numeric hsl/hsla.",
            r"(?i)\bhsla?\(",
            Some(r"(?i)\bhsla?\(\s*var\("),
        ),
        Rule::new(
            "bg-black/white utility",
            "Use overlay tokens instead of bg-black/white.",
            r"(?i)bg-(?:black|white)/\d+",
            None,
        ),
        Rule::new(
            "Arbitrary literal utility",
            "Arbitrary color utilities must reference tokens.",
            r"(?i)(?:bg|text|border|ring|stroke|fill|shadow|from|via|to)-\[[^\]]*(?:#|rgba?\(|hsla?\()[^\]]*\]",
            Some(
                r"(?i)(?:bg|text|border|ring|stroke|fill|shadow|from|via|to)-\[[^\]]*(?:rgba?|hsla?)\(\s*var\([^\]]*\]",
            ),
        ),
        Rule::new(
            "Inline hsl alpha",
            "Alpha must come from dedicated tokens.",
            r"(?i)hsl\(var\(--[^)]+?\)\s*/[^)]+\)",
            None,
        ),
    ]
}
