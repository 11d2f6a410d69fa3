use std::collections::VecDeque;

/// A DAG in which every edge spans exactly one rank.
///
/// Indices below `real_count` are layout-graph nodes; the rest are virtual
/// nodes inserted along edges that skip ranks.
pub(super) struct Layered {
    pub(super) ranks: Vec<usize>,
    pub(super) real_count: usize,
    pub(super) edges: Vec<(usize, usize)>,
}

impl Layered {
    pub(super) fn node_count(&self) -> usize {
        self.ranks.len()
    }

    pub(super) fn is_virtual(&self, node: usize) -> bool {
        node >= self.real_count
    }

    pub(super) fn rank_count(&self) -> usize {
        self.ranks.iter().max().map_or(0, |r| r + 1)
    }
}

/// Ranks nodes by longest path from the sources, then splits every edge that
/// crosses more than one rank into a chain of virtual nodes.
pub(super) fn layer(node_count: usize, dag: &[(usize, usize)]) -> Layered {
    let ranks = longest_path_ranks(node_count, dag);
    split_long_edges(ranks, dag)
}

fn longest_path_ranks(node_count: usize, dag: &[(usize, usize)]) -> Vec<usize> {
    let mut indegree = vec![0usize; node_count];
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(source, target) in dag {
        indegree[target] += 1;
        outgoing[source].push(target);
    }

    let mut ranks = vec![0usize; node_count];
    let mut queue: VecDeque<usize> = (0..node_count).filter(|&n| indegree[n] == 0).collect();

    while let Some(node) = queue.pop_front() {
        for &target in &outgoing[node] {
            ranks[target] = ranks[target].max(ranks[node] + 1);
            indegree[target] -= 1;
            if indegree[target] == 0 {
                queue.push_back(target);
            }
        }
    }
    ranks
}

fn split_long_edges(mut ranks: Vec<usize>, dag: &[(usize, usize)]) -> Layered {
    let real_count = ranks.len();
    let mut edges = Vec::with_capacity(dag.len());

    for &(source, target) in dag {
        let (from, to) = (ranks[source], ranks[target]);
        let mut previous = source;
        for rank in from + 1..to {
            ranks.push(rank);
            let dummy = ranks.len() - 1;
            edges.push((previous, dummy));
            previous = dummy;
        }
        edges.push((previous, target));
    }

    Layered {
        ranks,
        real_count,
        edges,
    }
}
