use super::rank::Layered;
use itertools::Itertools;

/// Orders the nodes inside each rank to keep edge crossings low.
///
/// Alternates downward and upward barycenter sweeps and keeps the best
/// ordering seen. Nodes start in index order, so the result is deterministic.
pub(super) fn order(layered: &Layered, sweeps: usize) -> Vec<Vec<usize>> {
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); layered.rank_count()];
    for node in 0..layered.node_count() {
        layers[layered.ranks[node]].push(node);
    }

    let mut upper: Vec<Vec<usize>> = vec![Vec::new(); layered.node_count()];
    let mut lower: Vec<Vec<usize>> = vec![Vec::new(); layered.node_count()];
    for &(source, target) in &layered.edges {
        lower[source].push(target);
        upper[target].push(source);
    }

    let mut best = layers.clone();
    let mut best_crossings = count_crossings(&layers, &lower);

    for sweep in 0..sweeps {
        if sweep % 2 == 0 {
            for rank in 1..layers.len() {
                let (fixed, free) = layers.split_at_mut(rank);
                reorder(&mut free[0], &fixed[rank - 1], &upper);
            }
        } else {
            for rank in (0..layers.len().saturating_sub(1)).rev() {
                let (free, fixed) = layers.split_at_mut(rank + 1);
                reorder(&mut free[rank], &fixed[0], &lower);
            }
        }

        let crossings = count_crossings(&layers, &lower);
        if crossings < best_crossings {
            best_crossings = crossings;
            best = layers.clone();
        }
        if best_crossings == 0 {
            break;
        }
    }
    best
}

/// Sorts `layer` by the mean position of each node's neighbours in `fixed`.
/// A node without neighbours keeps its current slot as its barycenter.
fn reorder(layer: &mut [usize], fixed: &[usize], neighbours: &[Vec<usize>]) {
    let slot = |node: usize| fixed.iter().position(|&n| n == node);

    let mut keyed: Vec<(f64, usize)> = layer
        .iter()
        .enumerate()
        .map(|(current, &node)| {
            let positions: Vec<usize> = neighbours[node].iter().filter_map(|&n| slot(n)).collect();
            let barycenter = if positions.is_empty() {
                current as f64
            } else {
                positions.iter().sum::<usize>() as f64 / positions.len() as f64
            };
            (barycenter, node)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (entry, (_, node)) in layer.iter_mut().zip(keyed) {
        *entry = node;
    }
}

/// Total number of pairwise edge crossings between adjacent ranks.
fn count_crossings(layers: &[Vec<usize>], lower: &[Vec<usize>]) -> usize {
    layers
        .iter()
        .tuple_windows()
        .map(|(top, bottom)| {
            let bottom_slot = |node: usize| bottom.iter().position(|&n| n == node);
            let segments: Vec<(usize, usize)> = top
                .iter()
                .enumerate()
                .flat_map(|(i, &node)| {
                    lower[node]
                        .iter()
                        .filter_map(move |&t| bottom_slot(t).map(|j| (i, j)))
                })
                .collect();

            segments
                .iter()
                .tuple_combinations()
                .filter(|((a1, b1), (a2, b2))| (a1 < a2 && b1 > b2) || (a1 > a2 && b1 < b2))
                .count()
        })
        .sum()
}
