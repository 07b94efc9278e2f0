//! Generic tree walks.
//!
//! Every traversal in the crate goes through these helpers, parameterized by a
//! "children of" function, so no code branches on a specific nesting level.

/// A node reached during a depth-first walk
pub struct Visit<'a, T> {
    pub node: &'a T,
    /// 1 for roots
    pub depth: usize,
    /// Position among its siblings
    pub index: usize,
    pub parent: Option<&'a T>,
}

/// Pre-order depth-first iterator over a forest
pub struct DepthFirst<'a, T, F> {
    stack: Vec<(&'a T, usize, usize, Option<&'a T>)>,
    children: F,
}

/// Walk `roots` depth-first (pre-order, siblings in order)
pub fn depth_first<'a, T, F>(roots: &'a [T], children: F) -> DepthFirst<'a, T, F>
where
    F: Fn(&'a T) -> &'a [T],
{
    let stack = roots
        .iter()
        .enumerate()
        .rev()
        .map(|(index, node)| (node, 1, index, None))
        .collect();
    DepthFirst { stack, children }
}

impl<'a, T, F> Iterator for DepthFirst<'a, T, F>
where
    F: Fn(&'a T) -> &'a [T],
{
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth, index, parent) = self.stack.pop()?;
        for (i, child) in (self.children)(node).iter().enumerate().rev() {
            self.stack.push((child, depth + 1, i, Some(node)));
        }
        Some(Visit {
            node,
            depth,
            index,
            parent,
        })
    }
}

/// Find the first node matching `pred` and return the chain root..=node
pub fn find_path<'a, T, F, P>(roots: &'a [T], children: F, pred: P) -> Option<Vec<&'a T>>
where
    F: Fn(&'a T) -> &'a [T],
    P: Fn(&T) -> bool,
{
    let mut trail = Vec::new();
    if find_path_in(roots, &children, &pred, &mut trail) {
        Some(trail)
    } else {
        None
    }
}

fn find_path_in<'a, T>(
    nodes: &'a [T],
    children: &dyn Fn(&'a T) -> &'a [T],
    pred: &dyn Fn(&T) -> bool,
    trail: &mut Vec<&'a T>,
) -> bool {
    for node in nodes {
        trail.push(node);
        if pred(node) || find_path_in(children(node), children, pred, trail) {
            return true;
        }
        trail.pop();
    }
    false
}
