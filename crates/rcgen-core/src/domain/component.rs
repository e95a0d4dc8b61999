//! Value objects describing the component being generated.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Name used when `-N` is not given.
pub const DEFAULT_COMPONENT_NAME: &str = "DefaultComponent";

// ============================================================================
// Level
// ============================================================================

/// Grouping tag for components; rendered as an `L<n>` folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Level(u64);

impl Level {
    pub const fn new(level: u64) -> Self {
        Self(level)
    }

    /// Folder name for this level, e.g. `L2`.
    pub fn dir_name(self) -> String {
        format!("L{}", self.0)
    }
}

impl From<u64> for Level {
    fn from(level: u64) -> Self {
        Self(level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

// ============================================================================
// ComponentName
// ============================================================================

/// A case-sensitive component name that is safe to use as a folder name.
///
/// Invariant: non-empty, no path separators, not `.` or `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name == "." || name == ".." {
            Some("name cannot be a relative path segment")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidComponentName {
                name,
                reason: reason.into(),
            }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character lowercased (`Badge` -> `badge`).
    pub fn lower_first(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for ComponentName {
    fn default() -> Self {
        Self(DEFAULT_COMPONENT_NAME.to_string())
    }
}

impl FromStr for ComponentName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// RenderContext
// ============================================================================

/// Immutable parameters handed to every template function.
///
/// All derivations happen once at construction so templates only format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    component_name: String,
    lower_name: String,
}

impl RenderContext {
    pub fn new(name: &ComponentName) -> Self {
        Self {
            component_name: name.as_str().to_string(),
            lower_name: name.lower_first(),
        }
    }

    /// Name as given by the user, e.g. `Badge`.
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Identifier-prefix variant, e.g. `badge` (as in `badgeVariants`).
    pub fn lower_name(&self) -> &str {
        &self.lower_name
    }
}

// ============================================================================
// ArtifactKind
// ============================================================================

/// Every kind of file the scaffold can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// `<Name>.tsx`
    Component,
    /// `<Name>.stories.tsx`
    Story,
    /// `<Name>.test.tsx`
    Test,
    /// `<Name>/index.ts`
    FolderIndex,
    /// `<root>/index.ts`
    RootIndex,
    /// `<root>/L<n>/index.ts`
    LevelIndex,
    /// `<root>/utils/cn.ts`
    SharedUtil,
}

impl ArtifactKind {
    /// The four files written into every new component folder, in order.
    pub const COMPONENT_FILES: [ArtifactKind; 4] = [
        Self::Component,
        Self::Story,
        Self::Test,
        Self::FolderIndex,
    ];

    /// File name this artifact is written under.
    pub fn file_name(self, name: &ComponentName) -> String {
        match self {
            Self::Component => format!("{name}.tsx"),
            Self::Story => format!("{name}.stories.tsx"),
            Self::Test => format!("{name}.test.tsx"),
            Self::FolderIndex | Self::RootIndex | Self::LevelIndex => "index.ts".into(),
            Self::SharedUtil => "cn.ts".into(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Story => "story",
            Self::Test => "test",
            Self::FolderIndex => "folder-index",
            Self::RootIndex => "root-index",
            Self::LevelIndex => "level-index",
            Self::SharedUtil => "shared-util",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_dir_name() {
        assert_eq!(Level::new(0).dir_name(), "L0");
        assert_eq!(Level::from(12).dir_name(), "L12");
    }

    #[test]
    fn valid_names_pass() {
        for name in ["Badge", "badge", "MyButton2", "Card_Header", "Ünicode"] {
            assert!(ComponentName::new(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            ComponentName::new(""),
            Err(DomainError::InvalidComponentName { .. })
        ));
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(ComponentName::new("a/b").is_err());
        assert!(ComponentName::new("a\\b").is_err());
        assert!(ComponentName::new("..").is_err());
    }

    #[test]
    fn default_name_is_placeholder() {
        assert_eq!(ComponentName::default().as_str(), DEFAULT_COMPONENT_NAME);
    }

    #[test]
    fn lower_first_only_touches_first_char() {
        let name = ComponentName::new("BadgeGroup").unwrap();
        assert_eq!(name.lower_first(), "badgeGroup");

        let already = ComponentName::new("x").unwrap();
        assert_eq!(already.lower_first(), "x");
    }

    #[test]
    fn render_context_derives_lower_name() {
        let ctx = RenderContext::new(&ComponentName::new("Badge").unwrap());
        assert_eq!(ctx.component_name(), "Badge");
        assert_eq!(ctx.lower_name(), "badge");
    }

    #[test]
    fn artifact_file_names() {
        let name = ComponentName::new("Badge").unwrap();
        assert_eq!(ArtifactKind::Component.file_name(&name), "Badge.tsx");
        assert_eq!(ArtifactKind::Story.file_name(&name), "Badge.stories.tsx");
        assert_eq!(ArtifactKind::Test.file_name(&name), "Badge.test.tsx");
        assert_eq!(ArtifactKind::FolderIndex.file_name(&name), "index.ts");
        assert_eq!(ArtifactKind::SharedUtil.file_name(&name), "cn.ts");
    }
}
