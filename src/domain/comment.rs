use serde::Deserialize;

use super::news::{null_as_default, News};

/// A comment and its replies. `level` is 0 for top-level comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub news: News,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<CommentNode>,
    #[serde(default)]
    pub level: u32,
}

/// A comment paired with the nesting level it is displayed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatComment<'a> {
    pub node: &'a CommentNode,
    pub level: u32,
}

/// Flatten a comment tree in pre-order.
///
/// Every node is followed by its own replies before its next sibling.
/// Sibling order is kept as given.
pub fn flatten_comments(comments: &[CommentNode]) -> Vec<FlatComment<'_>> {
    let mut out = Vec::new();
    push_pre_order(comments, &mut out);
    out
}

fn push_pre_order<'a>(comments: &'a [CommentNode], out: &mut Vec<FlatComment<'a>>) {
    for node in comments {
        out.push(FlatComment {
            node,
            level: node.level,
        });
        push_pre_order(&node.comments, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u64, level: u32, replies: Vec<CommentNode>) -> CommentNode {
        CommentNode {
            news: News {
                id,
                ..News::default()
            },
            comments: replies,
            level,
        }
    }

    #[test]
    fn test_flatten_pre_order() {
        // A[B[C], D]
        let tree = vec![
            comment(1, 0, vec![comment(2, 1, vec![comment(3, 2, vec![])])]),
            comment(4, 0, vec![]),
        ];

        let flat = flatten_comments(&tree);
        let ids: Vec<u64> = flat.iter().map(|c| c.node.news.id).collect();
        let levels: Vec<u32> = flat.iter().map(|c| c.level).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(levels, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_flatten_keeps_sibling_order() {
        let tree = vec![
            comment(30, 0, vec![comment(32, 1, vec![]), comment(31, 1, vec![])]),
            comment(10, 0, vec![]),
        ];

        let ids: Vec<u64> = flatten_comments(&tree)
            .iter()
            .map(|c| c.node.news.id)
            .collect();
        assert_eq!(ids, vec![30, 32, 31, 10]);
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_comments(&[]).is_empty());
    }
}
