use super::*;

/// Label-addressed variants of the searches in [`Traversal`] and [`ShortestPaths`].
///
/// Labels are resolved to the lowest node carrying them before the search runs; an unknown label
/// fails with [`GraphError::LabelNotFound`]. The consistency check needs no variant, as
/// [`Connectivity`] is available on [`LabeledGraph`] directly.
pub trait LabeledSearch {
    /// Label-addressed [`Traversal::depth_first_search`]
    fn depth_first_search_by_label(&self, root: &str, target: &str) -> Result<bool>;

    /// Label-addressed [`Traversal::breadth_first_search`]
    fn breadth_first_search_by_label(&self, root: &str, target: &str) -> Result<bool>;

    /// Label-addressed [`ShortestPaths::find_shortest_path`]
    fn find_shortest_path_by_label(&self, root: &str, target: &str) -> Result<Distance>;

    /// Node-addressed [`Traversal::depth_first_search`]
    fn depth_first_search_by_node(&self, root: &LabeledNode, target: &LabeledNode) -> Result<bool>;

    /// Node-addressed [`Traversal::breadth_first_search`]
    fn breadth_first_search_by_node(
        &self,
        root: &LabeledNode,
        target: &LabeledNode,
    ) -> Result<bool>;

    /// Node-addressed [`ShortestPaths::find_shortest_path`]
    fn find_shortest_path_by_node(
        &self,
        root: &LabeledNode,
        target: &LabeledNode,
    ) -> Result<Distance>;
}

impl LabeledSearch for LabeledGraph {
    fn depth_first_search_by_label(&self, root: &str, target: &str) -> Result<bool> {
        self.depth_first_search(self.find_node(root)?, self.find_node(target)?)
    }

    fn breadth_first_search_by_label(&self, root: &str, target: &str) -> Result<bool> {
        self.breadth_first_search(self.find_node(root)?, self.find_node(target)?)
    }

    fn find_shortest_path_by_label(&self, root: &str, target: &str) -> Result<Distance> {
        self.find_shortest_path(self.find_node(root)?, self.find_node(target)?)
    }

    fn depth_first_search_by_node(&self, root: &LabeledNode, target: &LabeledNode) -> Result<bool> {
        self.depth_first_search(root.id(), target.id())
    }

    fn breadth_first_search_by_node(
        &self,
        root: &LabeledNode,
        target: &LabeledNode,
    ) -> Result<bool> {
        self.breadth_first_search(root.id(), target.id())
    }

    fn find_shortest_path_by_node(
        &self,
        root: &LabeledNode,
        target: &LabeledNode,
    ) -> Result<Distance> {
        self.find_shortest_path(root.id(), target.id())
    }
}
