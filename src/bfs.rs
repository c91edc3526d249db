//! A breadth-first counterpart of the usual
//! [pathfinding astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! Since every step costs the same, the first time a node is reached is also the cheapest, so
//! nodes are never re-inserted and no priority queue is needed.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Walks the reached-from indices back from `goal_index` until the root, whose parent is
/// [usize::MAX], then reverses the result.
fn reverse_path<N>(parents: &FxIndexMap<N, usize>, goal_index: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut index = goal_index;
    while let Some((node, &parent)) = parents.get_index(index) {
        path.push(node.clone());
        index = parent;
    }
    path.reverse();
    path
}

/// Explores nodes in first-discovered order starting from `start`. Each node is enqueued at most
/// once. Returns the path from `start` to the first node satisfying `success`, both inclusive, or
/// [None] once the frontier runs dry.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    while let Some(index) = frontier.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                debug!("Goal reached after visiting {} nodes", parents.len());
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                frontier.push_back(e.index());
                e.insert(index);
            }
        }
    }
    debug!("Frontier exhausted after visiting {} nodes", parents.len());
    None
}
