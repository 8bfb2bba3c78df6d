use super::{LockedEntry, NormalizedName, PackageNode};
use std::collections::HashMap;

/// DependencyGraph aggregate: one node per locked package plus the edges
/// between them.
///
/// Nodes are addressed by index (lock-file order). Edges are stored as
/// indices and only turned into `name@version` ids when the graph is
/// consumed, so a removed node can never leave a dangling reference behind.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<PackageNode>,
    normalized_names: Vec<NormalizedName>,
    lock_groups: Vec<Option<String>>,
    edges: Vec<Vec<usize>>,
    name_index: HashMap<NormalizedName, Vec<usize>>,
}

impl DependencyGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            normalized_names: Vec::with_capacity(capacity),
            lock_groups: Vec::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
            name_index: HashMap::with_capacity(capacity),
        }
    }

    /// Adds a node for `entry` and returns its index.
    pub fn add_node(&mut self, entry: &LockedEntry) -> usize {
        let idx = self.nodes.len();
        let normalized = entry.normalized_name();

        self.nodes.push(PackageNode::new(entry.name(), entry.version()));
        self.lock_groups.push(entry.group().map(str::to_string));
        self.edges.push(Vec::new());
        self.name_index.entry(normalized.clone()).or_default().push(idx);
        self.normalized_names.push(normalized);

        idx
    }

    /// Adds `from -> to`. Self edges and repeated edges are ignored.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if from == to || to >= self.nodes.len() {
            return;
        }
        let targets = &mut self.edges[from];
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Indices of every node whose name normalizes to `name`, in lock order.
    pub fn candidates(&self, name: &NormalizedName) -> &[usize] {
        self.name_index.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: usize) -> &PackageNode {
        &self.nodes[idx]
    }

    pub fn node_mut(&mut self, idx: usize) -> &mut PackageNode {
        &mut self.nodes[idx]
    }

    pub fn nodes(&self) -> &[PackageNode] {
        &self.nodes
    }

    pub fn normalized_name(&self, idx: usize) -> &NormalizedName {
        &self.normalized_names[idx]
    }

    pub fn lock_group(&self, idx: usize) -> Option<&str> {
        self.lock_groups[idx].as_deref()
    }

    pub fn dependencies_of(&self, idx: usize) -> &[usize] {
        &self.edges[idx]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Keeps the nodes for which `keep(idx)` is true. Edges into removed
    /// nodes are dropped and the remaining indices are compacted.
    pub fn retain<F>(self, keep: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let mut remap: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut next = 0;
        for (idx, slot) in remap.iter_mut().enumerate() {
            if keep(idx) {
                *slot = Some(next);
                next += 1;
            }
        }

        let mut retained = Self::with_capacity(next);
        let parts = self
            .nodes
            .into_iter()
            .zip(self.normalized_names)
            .zip(self.lock_groups)
            .zip(self.edges)
            .enumerate();

        for (old_idx, (((node, normalized), group), targets)) in parts {
            let Some(new_idx) = remap[old_idx] else {
                continue;
            };
            retained.nodes.push(node);
            retained
                .name_index
                .entry(normalized.clone())
                .or_default()
                .push(new_idx);
            retained.normalized_names.push(normalized);
            retained.lock_groups.push(group);
            retained
                .edges
                .push(targets.into_iter().filter_map(|t| remap[t]).collect());
        }

        retained
    }

    /// Consumes the graph, writing each node's surviving edges into its
    /// `depends_on` list.
    pub fn into_packages(self) -> Vec<PackageNode> {
        let ids: Vec<String> = self.nodes.iter().map(|n| n.id().to_string()).collect();

        self.nodes
            .into_iter()
            .zip(self.edges)
            .map(|(mut node, targets)| {
                node.set_depends_on(targets.into_iter().map(|t| ids[t].clone()).collect());
                node
            })
            .collect()
    }
}
