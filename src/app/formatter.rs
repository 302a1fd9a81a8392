use crate::app::models::FileEntry;
use std::collections::BTreeMap;
use std::path::Component;

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// One path segment; a node without children is a file.
#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn insert<'a>(&mut self, mut segments: impl Iterator<Item = &'a str>) {
        if let Some(segment) = segments.next() {
            self.children
                .entry(segment.to_string())
                .or_default()
                .insert(segments);
        }
    }

    fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    /// Files first, then directories; each group by name.
    fn sorted_children(&self) -> Vec<(&String, &TreeNode)> {
        let mut items: Vec<_> = self.children.iter().collect();
        items.sort_by_key(|(_, node)| node.is_dir());
        items
    }

    fn render_into(&self, prefix: &str, lines: &mut Vec<String>) {
        let items = self.sorted_children();
        let last = items.len().saturating_sub(1);
        for (i, (name, node)) in items.into_iter().enumerate() {
            let (connector, continuation) = if i < last {
                (BRANCH, PIPE)
            } else {
                (CORNER, SPACE)
            };
            lines.push(format!("{}{}{}", prefix, connector, name));
            if node.is_dir() {
                node.render_into(&format!("{}{}", prefix, continuation), lines);
            }
        }
    }
}

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders the collected paths as a box-drawing tree, one line per node.
    pub fn generate_tree(entries: &[FileEntry]) -> String {
        let mut root = TreeNode::default();
        for entry in entries {
            let segments: Vec<String> = entry
                .relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect();
            root.insert(segments.iter().map(String::as_str));
        }

        let mut lines = Vec::new();
        root.render_into("", &mut lines);
        lines.join("\n")
    }
}
