/// One row of the fixed classification table.
///
/// The table order below is the authoritative rendering order; it is never
/// sorted by volume or alphabetically. Exclusion removes rows, never reorders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    /// Commit types that map to this category
    pub aliases: &'static [&'static str],
    pub header: &'static str,
    pub icon: &'static str,
    /// Prefix applied to a commit line when the commit carries a breaking note
    pub breaking_prefix: Option<&'static str>,
}

impl CategoryRule {
    /// Whether a (lowercased) commit type belongs to this category
    pub fn matches(&self, commit_type: &str) -> bool {
        self.aliases.contains(&commit_type)
    }

    /// Whether any alias of this category appears in the exclusion list
    pub fn is_excluded(&self, exclude_types: &[String]) -> bool {
        self.aliases
            .iter()
            .any(|alias| exclude_types.iter().any(|e| e == alias))
    }

    /// Section heading, e.g. `✨ New Features`
    pub fn title(&self) -> String {
        format!("{} {}", self.icon, self.header)
    }
}

const CATEGORY_TABLE: &[CategoryRule] = &[
    CategoryRule {
        aliases: &["feat", "feature"],
        header: "New Features",
        icon: "✨",
        breaking_prefix: Some("🚨"),
    },
    CategoryRule {
        aliases: &["fix", "bugfix"],
        header: "Bug Fixes",
        icon: "🐛",
        breaking_prefix: Some("🚨"),
    },
    CategoryRule {
        aliases: &["perf"],
        header: "Performance Improvements",
        icon: "⚡",
        breaking_prefix: Some("🚨"),
    },
    CategoryRule {
        aliases: &["refactor"],
        header: "Refactors",
        icon: "♻️",
        breaking_prefix: Some("🚨"),
    },
    CategoryRule {
        aliases: &["revert"],
        header: "Reverts",
        icon: "⏪",
        breaking_prefix: Some("🚨"),
    },
    CategoryRule {
        aliases: &["docs", "doc"],
        header: "Documentation",
        icon: "📚",
        breaking_prefix: None,
    },
    CategoryRule {
        aliases: &["style"],
        header: "Styling",
        icon: "💅",
        breaking_prefix: None,
    },
    CategoryRule {
        aliases: &["test", "tests"],
        header: "Tests",
        icon: "🧪",
        breaking_prefix: None,
    },
    CategoryRule {
        aliases: &["build"],
        header: "Build System",
        icon: "🏗️",
        breaking_prefix: Some("🚨"),
    },
    CategoryRule {
        aliases: &["ci"],
        header: "Continuous Integration",
        icon: "⚙️",
        breaking_prefix: None,
    },
    CategoryRule {
        aliases: &["chore"],
        header: "Chores",
        icon: "🧹",
        breaking_prefix: None,
    },
    CategoryRule {
        aliases: &["other"],
        header: "Other Changes",
        icon: "📦",
        breaking_prefix: None,
    },
];

/// The fixed, ordered category table.
pub fn category_table() -> &'static [CategoryRule] {
    CATEGORY_TABLE
}
