//! Text rendering of the tree shape, for debugging.

use std::fmt;

use crate::map::AvlTreeMap;
use crate::node::Link;

/// Draws the tree with every node as `key (height)` and absent children as `#`.
///
/// Created by [`AvlTreeMap::shape`]. Rendering recurses once per tree level.
pub struct Shape<'a, K, V> {
    map: &'a AvlTreeMap<K, V>,
}

impl<'a, K: Ord, V> Shape<'a, K, V> {
    pub(crate) fn new(map: &'a AvlTreeMap<K, V>) -> Self {
        Self { map }
    }
}

impl<K: Ord + fmt::Display, V> Shape<'_, K, V> {
    fn render(&self, link: Link) -> Vec<String> {
        let Link::Node(id) = link else {
            return vec![String::from("#")];
        };
        let node = self.map.node(id);
        let key = node.key.to_string();
        let height = node.height.to_string();
        let left = self.render(node.left);
        let right = self.render(node.right);

        let left_width = width(left.last());
        let right_width = width(right.last());
        let root_width = key.chars().count() + height.chars().count() + 3;

        let mut lines = Vec::with_capacity(2 + left.len().max(right.len()));
        lines.push(format!(
            "{}{key} ({height}){}",
            " ".repeat(left_width + 1),
            " ".repeat(right_width + 1)
        ));

        // Connectors reach from the child's label to this node's label
        let left_label_end = left[0].trim_end().chars().count();
        let right_label_start = right[0].chars().count() - right[0].trim_start().chars().count();
        lines.push(format!(
            "{}{}/{}\\{}{}",
            " ".repeat(left_label_end),
            "_".repeat(left_width - left_label_end),
            " ".repeat(root_width),
            "_".repeat(right_label_start),
            " ".repeat(right_width - right_label_start)
        ));

        for i in 0..left.len().max(right.len()) {
            let mut row = String::new();
            match left.get(i) {
                Some(line) => row.push_str(line),
                None => row.push_str(&" ".repeat(left_width)),
            }
            row.push_str(&" ".repeat(root_width + 2));
            match right.get(i) {
                Some(line) => row.push_str(line),
                None => row.push_str(&" ".repeat(right_width)),
            }
            lines.push(row);
        }
        lines
    }
}

fn width(line: Option<&String>) -> usize {
    line.map_or(0, |line| line.chars().count())
}

impl<K: Ord + fmt::Display, V> fmt::Display for Shape<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.map.root_link()).join("\n"))
    }
}
