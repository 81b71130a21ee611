//! CART regression tree: greedy variance-reduction splits, mean-value leaves.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 16,
            min_samples_leaf: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Fits a tree on the rows selected by `indices` (duplicates allowed,
    /// so bootstrap samples work unchanged).
    pub fn fit(rows: &[Vec<f64>], targets: &[f64], indices: &[usize], params: TreeParams) -> Self {
        assert!(!indices.is_empty());
        let mut tree = Self { nodes: Vec::new() };
        tree.grow(rows, targets, indices.to_vec(), params, 0);
        tree
    }

    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Grows a subtree and returns its root node index.
    fn grow(
        &mut self,
        rows: &[Vec<f64>],
        targets: &[f64],
        indices: Vec<usize>,
        params: TreeParams,
        depth: usize,
    ) -> usize {
        let mean = mean_of(targets, &indices);
        if depth >= params.max_depth || indices.len() < 2 * params.min_samples_leaf {
            return self.push(Node::Leaf { value: mean });
        }
        let split = match best_split(rows, targets, &indices, params.min_samples_leaf) {
            Some(split) => split,
            None => return self.push(Node::Leaf { value: mean }),
        };
        let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&index| rows[index][split.feature] <= split.threshold);

        // Placeholder keeps the parent's index stable while the children are grown.
        let node = self.push(Node::Leaf { value: mean });
        let left = self.grow(rows, targets, left_indices, params, depth + 1);
        let right = self.grow(rows, targets, right_indices, params, depth + 1);
        self.nodes[node] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        node
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

struct Split {
    feature: usize,
    threshold: f64,
}

/// Finds the split minimising the summed squared error of the two children.
/// Returns `None` when no cut improves on the parent node.
fn best_split(
    rows: &[Vec<f64>],
    targets: &[f64],
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<Split> {
    let n_features = rows[indices[0]].len();
    let total: f64 = indices.iter().map(|&index| targets[index]).sum();
    let total_squared: f64 = indices
        .iter()
        .map(|&index| targets[index] * targets[index])
        .sum();
    let parent_cost = total_squared - total * total / indices.len() as f64;

    let mut best: Option<(f64, Split)> = None;
    let mut order = indices.to_vec();
    for feature in 0..n_features {
        order.sort_unstable_by(|&a, &b| rows[a][feature].total_cmp(&rows[b][feature]));
        let mut left_sum = 0.0;
        let mut left_squared = 0.0;
        for (position, &index) in order.iter().enumerate().take(order.len() - 1) {
            let target = targets[index];
            left_sum += target;
            left_squared += target * target;

            let n_left = position + 1;
            let n_right = order.len() - n_left;
            if n_left < min_samples_leaf || n_right < min_samples_leaf {
                continue;
            }
            let value = rows[index][feature];
            let next_value = rows[order[position + 1]][feature];
            if next_value <= value {
                // No cut point between equal feature values.
                continue;
            }

            let right_sum = total - left_sum;
            let right_squared = total_squared - left_squared;
            let cost = (left_squared - left_sum * left_sum / n_left as f64)
                + (right_squared - right_sum * right_sum / n_right as f64);
            let improves = match &best {
                Some((best_cost, _)) => cost < *best_cost,
                None => cost < parent_cost - 1e-12,
            };
            if improves {
                best = Some((
                    cost,
                    Split {
                        feature,
                        threshold: (value + next_value) / 2.0,
                    },
                ));
            }
        }
    }
    best.map(|(_, split)| split)
}

fn mean_of(targets: &[f64], indices: &[usize]) -> f64 {
    indices.iter().map(|&index| targets[index]).sum::<f64>() / indices.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_feature_rows(values: &[f64]) -> Vec<Vec<f64>> {
        values.iter().map(|&value| vec![value]).collect()
    }

    #[test]
    fn perfect_split_ok() {
        let rows = single_feature_rows(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let targets = [0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0];
        let indices: Vec<usize> = (0..rows.len()).collect();
        let tree = RegressionTree::fit(&rows, &targets, &indices, TreeParams::default());
        assert_eq!(tree.predict(&[1.5]), 0.0);
        assert_eq!(tree.predict(&[6.5]), 10.0);
    }

    #[test]
    fn depth_zero_is_mean_ok() {
        let rows = single_feature_rows(&[0.0, 1.0, 2.0, 3.0]);
        let targets = [1.0, 2.0, 3.0, 6.0];
        let indices: Vec<usize> = (0..rows.len()).collect();
        let params = TreeParams {
            max_depth: 0,
            min_samples_leaf: 1,
        };
        let tree = RegressionTree::fit(&rows, &targets, &indices, params);
        assert_eq!(tree.predict(&[0.0]), 3.0);
        assert_eq!(tree.predict(&[100.0]), 3.0);
    }

    #[test]
    fn constant_target_is_leaf_ok() {
        let rows = single_feature_rows(&[0.0, 1.0, 2.0, 3.0]);
        let targets = [5.0; 4];
        let indices: Vec<usize> = (0..rows.len()).collect();
        let tree = RegressionTree::fit(&rows, &targets, &indices, TreeParams::default());
        assert_eq!(tree.predict(&[2.5]), 5.0);
    }

    #[test]
    fn min_samples_leaf_blocks_split_ok() {
        let rows = single_feature_rows(&[0.0, 1.0, 2.0, 3.0]);
        let targets = [0.0, 0.0, 10.0, 10.0];
        let indices: Vec<usize> = (0..rows.len()).collect();
        let params = TreeParams {
            max_depth: 16,
            min_samples_leaf: 4,
        };
        let tree = RegressionTree::fit(&rows, &targets, &indices, params);
        assert_eq!(tree.predict(&[0.0]), 5.0);
    }

    #[test]
    fn identical_features_never_split_ok() {
        let rows = single_feature_rows(&[1.0, 1.0, 1.0, 1.0]);
        let targets = [0.0, 1.0, 2.0, 3.0];
        let indices: Vec<usize> = (0..rows.len()).collect();
        let tree = RegressionTree::fit(&rows, &targets, &indices, TreeParams::default());
        assert_eq!(tree.predict(&[1.0]), 1.5);
    }
}
