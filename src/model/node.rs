// Navigation node - the literal shape of the table of contents
use serde::{Deserialize, Serialize};

/// One entry of the table of contents as written by the book generator.
///
/// `href` is `None` for structural entries that do not link anywhere
/// (draft chapters, part titles).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NavigationNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub label: String,
    /// Section number such as `2.1.`; affix chapters have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default)]
    pub affix: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            label: label.into(),
            number: None,
            affix: false,
            children: Vec::new(),
        }
    }

    pub fn heading(label: impl Into<String>) -> Self {
        Self {
            href: None,
            label: label.into(),
            number: None,
            affix: false,
            children: Vec::new(),
        }
    }

    pub fn numbered(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn affix(mut self) -> Self {
        self.affix = true;
        self
    }

    pub fn with_children(mut self, children: Vec<NavigationNode>) -> Self {
        self.children = children;
        self
    }
}
