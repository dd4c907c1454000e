//! Shared enums: project categories and the UI theme

use serde::{Deserialize, Serialize};

/// Keywords that classify a tech string as frontend, checked first
const FRONTEND_KEYWORDS: [&str; 3] = ["react", "vue", "angular"];

/// Keywords that classify a tech string as backend, checked second
const BACKEND_KEYWORDS: [&str; 3] = ["node", "django", "express"];

/// Category bucket a project falls into, derived from its tech string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
}

impl Category {
    /// Classify a raw tech string into exactly one category.
    ///
    /// Matching is a case-insensitive substring check against the full
    /// string, in priority order: frontend keywords win over backend
    /// keywords, and anything matching neither is fullstack. A project
    /// listing both "React" and "Node.js" therefore classifies frontend.
    pub fn classify(tech: &str) -> Self {
        let tech = tech.to_lowercase();

        if FRONTEND_KEYWORDS.iter().any(|kw| tech.contains(kw)) {
            Category::Frontend
        } else if BACKEND_KEYWORDS.iter().any(|kw| tech.contains(kw)) {
            Category::Backend
        } else {
            Category::Fullstack
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Fullstack => "fullstack",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// UI theme, session-scoped (never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
