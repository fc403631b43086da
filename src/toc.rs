// Table of contents - the tree baked into the widget, and TOML-described alternatives
use crate::error::ConfigError;
use crate::model::{Fold, NavTree, NavigationNode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The book's table of contents as produced by the site generator.
pub fn builtin() -> NavTree {
    use NavigationNode as N;

    NavTree::from_nodes(&[
        N::link("Zngur", "zngur.html").affix(),
        N::link("Tutorial", "tutorial.html").numbered("1."),
        N::link("Calling Rust from C++", "call_rust_from_cpp/index.html")
            .numbered("2.")
            .with_children(vec![
                N::link("Name mapping", "call_rust_from_cpp/name_mapping.html").numbered("2.1."),
                N::link("Well-known traits", "call_rust_from_cpp/wellknown_traits.html").numbered("2.2."),
                N::link("Layout policy", "call_rust_from_cpp/layout_policy.html").numbered("2.3."),
                N::link("Fields", "call_rust_from_cpp/fields.html").numbered("2.4."),
                N::link("Types with special support", "call_rust_from_cpp/special_types.html").numbered("2.5."),
                N::link("Panic and exceptions", "call_rust_from_cpp/panic_and_exceptions.html").numbered("2.6."),
                N::link("Raw pointers", "call_rust_from_cpp/raw_pointers.html").numbered("2.7."),
            ]),
        N::link("Calling C++ from Rust", "call_cpp_from_rust/index.html")
            .numbered("3.")
            .with_children(vec![
                N::link("Calling C++ free functions", "call_cpp_from_rust/function.html").numbered("3.1."),
                N::link("Writing impl blocks for Rust types in C++", "call_cpp_from_rust/rust_impl.html")
                    .numbered("3.2."),
                N::heading("Box<dyn Fn>").numbered("3.3."),
                N::link("Opaque C++ types", "call_cpp_from_rust/opaque.html").numbered("3.4."),
            ]),
        N::link("Import", "import.html").numbered("4."),
        N::link("Conditional Compilation", "conditional_compilation.html").numbered("5."),
        N::link("Safety", "safety.html").numbered("6."),
        N::link("How it compares to other tools", "how_it_compares.html").numbered("7."),
        N::link("Design decisions", "philosophy.html").numbered("8."),
        N::link("How it works", "how_it_works.html").numbered("9."),
    ])
}

/// On-disk form of a table of contents.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TocFile {
    #[serde(default)]
    pub fold: Fold,
    #[serde(default)]
    pub chapter: Vec<NavigationNode>,
}

impl TocFile {
    pub fn into_tree(self) -> NavTree {
        NavTree::from_nodes(&self.chapter).with_fold(self.fold)
    }
}

pub fn load(path: &Path) -> Result<NavTree, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: TocFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into_tree())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_shape() {
        let tree = builtin();
        assert_eq!(tree.roots().len(), 10);
        assert_eq!(tree.len(), 21);
        assert_eq!(tree.links().count(), 20);
        let first = tree.links().next().unwrap();
        assert_eq!(first.href.as_deref(), Some("zngur.html"));
        assert!(first.affix);
        assert!(!tree.fold().enable);
    }

    #[test]
    fn test_load_toml_toc() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"
[fold]
enable = true
level = 1

[[chapter]]
label = "Intro"
href = "intro.html"
affix = true

[[chapter]]
label = "Guide"
href = "guide/index.html"
number = "1."

[[chapter.children]]
label = "Setup"
href = "guide/setup.html"
number = "1.1."
"#
        )
        .expect("write toc");

        let tree = load(file.path()).expect("load toc");
        assert_eq!(tree.fold(), Fold { enable: true, level: 1 });
        let labels: Vec<_> = tree.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Intro", "Guide", "Setup"]);
        assert_eq!(tree.entries()[2].parent, Some(tree.entries()[1].id));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[[chapter]]\nhref = 3\n").expect("write toc");
        assert!(matches!(load(file.path()), Err(ConfigError::Parse { .. })));
    }
}
