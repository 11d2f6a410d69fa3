use crate::model::{Step, Transition};
use ahash::AHashMap;

/// The graph the layout actually works on: one node per distinct step id and
/// one edge per usable transition, both referenced by index.
pub(super) struct LayoutGraph {
    ids: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl LayoutGraph {
    /// Edges pointing at the start step, self-loops and edges with an unknown
    /// endpoint are left out.
    pub(super) fn build(steps: &[Step], transitions: &[Transition]) -> Self {
        let mut index: AHashMap<&str, usize> = AHashMap::new();
        let mut ids = Vec::new();
        for step in steps {
            index.entry(step.id.as_str()).or_insert_with(|| {
                ids.push(step.id.clone());
                ids.len() - 1
            });
        }

        let start_id = steps.iter().find(|s| s.is_start).map(|s| s.id.as_str());

        let edges = transitions
            .iter()
            .filter(|t| Some(t.target.as_str()) != start_id)
            .filter(|t| !t.is_self_loop())
            .filter_map(|t| {
                let source = *index.get(t.source.as_str())?;
                let target = *index.get(t.target.as_str())?;
                Some((source, target))
            })
            .collect();

        Self { ids, edges }
    }

    pub(super) fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub(super) fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The edge list with every DFS back edge reversed, which leaves a DAG.
    pub(super) fn acyclic_edges(&self) -> Vec<(usize, usize)> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnStack,
            Done,
        }

        let n = self.ids.len();
        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (edge_idx, (source, _)) in self.edges.iter().enumerate() {
            outgoing[*source].push(edge_idx);
        }

        let mut marks = vec![Mark::Unvisited; n];
        let mut reversed = vec![false; self.edges.len()];

        for root in 0..n {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            // (node, position in its outgoing list)
            let mut stack = vec![(root, 0usize)];
            marks[root] = Mark::OnStack;

            while let Some((node, cursor)) = stack.last_mut() {
                let node = *node;
                if let Some(&edge_idx) = outgoing[node].get(*cursor) {
                    *cursor += 1;
                    let target = self.edges[edge_idx].1;
                    match marks[target] {
                        Mark::OnStack => reversed[edge_idx] = true,
                        Mark::Unvisited => {
                            marks[target] = Mark::OnStack;
                            stack.push((target, 0));
                        }
                        Mark::Done => {}
                    }
                } else {
                    marks[node] = Mark::Done;
                    stack.pop();
                }
            }
        }

        self.edges
            .iter()
            .zip(reversed)
            .map(|(&(s, t), flip)| if flip { (t, s) } else { (s, t) })
            .collect()
    }
}
