use super::LayoutConfig;
use super::rank::Layered;

/// Centre coordinates for every real node, indexed like the layout graph.
///
/// Each rank is a row. Within a row nodes are packed left to right, virtual
/// nodes taking no width, and every row is centred on the widest one.
pub(super) fn assign(
    layered: &Layered,
    layers: &[Vec<usize>],
    config: &LayoutConfig,
) -> Vec<(f64, f64)> {
    let width_of = |node: usize| {
        if layered.is_virtual(node) {
            0.0
        } else {
            config.node_width
        }
    };

    let mut rows: Vec<Vec<(usize, f64)>> = Vec::with_capacity(layers.len());
    let mut row_widths = Vec::with_capacity(layers.len());

    for layer in layers {
        let mut row = Vec::with_capacity(layer.len());
        let mut cursor = 0.0;
        let mut previous: Option<usize> = None;
        for &node in layer {
            if let Some(prev) = previous {
                let gap = if layered.is_virtual(prev) || layered.is_virtual(node) {
                    config.edge_sep
                } else {
                    config.node_sep
                };
                cursor += gap;
            }
            let width = width_of(node);
            row.push((node, cursor + width / 2.0));
            cursor += width;
            previous = Some(node);
        }
        rows.push(row);
        row_widths.push(cursor);
    }

    let axis = row_widths.iter().copied().fold(0.0, f64::max) / 2.0;
    let rank_step = config.node_height + config.rank_sep;

    let mut centers = vec![(0.0, 0.0); layered.real_count];
    for (rank, (row, row_width)) in rows.iter().zip(&row_widths).enumerate() {
        let offset = axis - row_width / 2.0;
        let y = rank as f64 * rank_step + config.node_height / 2.0;
        for &(node, x) in row {
            if !layered.is_virtual(node) {
                centers[node] = (x + offset, y);
            }
        }
    }
    centers
}
