//! Random tree generation.
//!
//! Trees are grown to an exact "complexity": the number of operator (non
//! leaf) nodes. Each operator splits its remaining budget between its
//! children at random cut points; leaves are placed where the budget runs out.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{NodeKind, TransformNode};

/// Kinds that can terminate a branch.
const LEAVES: [NodeKind; 3] = [NodeKind::VariableX, NodeKind::VariableY, NodeKind::Constant];

/// Kinds with at least one child.
const OPERATORS: [NodeKind; 8] = [
    NodeKind::Sum,
    NodeKind::Product,
    NodeKind::Sin,
    NodeKind::Level,
    NodeKind::Mix,
    NodeKind::Mod,
    NodeKind::Well,
    NodeKind::Tent,
];

/// Seeded random tree builder.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// A generator that always produces the same sequence of trees for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a complexity in `min..max`, or `min` if the range is empty.
    pub fn random_complexity(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            min
        } else {
            self.rng.gen_range(min..max)
        }
    }

    /// Grow a tree with exactly `complexity` operator nodes.
    pub fn generate(&mut self, complexity: usize) -> TransformNode {
        if complexity == 0 {
            let kind = LEAVES[self.rng.gen_range(0..LEAVES.len())];
            return self.leaf(kind);
        }

        let kind = OPERATORS[self.rng.gen_range(0..OPERATORS.len())];
        let sizes = self.split(complexity, kind.arity());

        match kind {
            NodeKind::Sum => TransformNode::sum(self.generate(sizes[0]), self.generate(sizes[1])),
            NodeKind::Product => {
                TransformNode::product(self.generate(sizes[0]), self.generate(sizes[1]))
            }
            NodeKind::Mod => {
                TransformNode::modulo(self.generate(sizes[0]), self.generate(sizes[1]))
            }
            NodeKind::Well => TransformNode::well(self.generate(sizes[0])),
            NodeKind::Tent => TransformNode::tent(self.generate(sizes[0])),
            NodeKind::Sin => {
                let input = self.generate(sizes[0]);
                let phase = self.rng.gen_range(0.0..PI);
                let freq = self.rng.gen_range(1.0..6.0);
                TransformNode::sin(phase, freq, input)
            }
            NodeKind::Level => {
                let level = self.generate(sizes[0]);
                let below = self.generate(sizes[1]);
                let above = self.generate(sizes[2]);
                let threshold = self.rng.gen_range(-1.0..1.0);
                TransformNode::level(threshold, level, below, above)
            }
            NodeKind::Mix => TransformNode::mix(
                self.generate(sizes[0]),
                self.generate(sizes[1]),
                self.generate(sizes[2]),
            ),
            NodeKind::VariableX | NodeKind::VariableY | NodeKind::Constant => self.leaf(kind),
        }
    }

    fn leaf(&mut self, kind: NodeKind) -> TransformNode {
        match kind {
            NodeKind::VariableY => TransformNode::variable_y(),
            NodeKind::Constant => TransformNode::constant(
                self.rng.gen_range(0.0..1.0),
                self.rng.gen_range(0.0..1.0),
                self.rng.gen_range(0.0..1.0),
            ),
            _ => TransformNode::variable_x(),
        }
    }

    /// Split `complexity - 1` between `arity` children using sorted cut
    /// points drawn from `0..complexity`.
    fn split(&mut self, complexity: usize, arity: usize) -> Vec<usize> {
        let mut cuts: Vec<usize> = (0..arity.saturating_sub(1))
            .map(|_| self.rng.gen_range(0..complexity))
            .collect();
        cuts.sort_unstable();

        let mut sizes = Vec::with_capacity(arity);
        let mut used = 0;
        for cut in cuts {
            sizes.push(cut - used);
            used = cut;
        }
        sizes.push(complexity - 1 - used);
        sizes
    }
}
