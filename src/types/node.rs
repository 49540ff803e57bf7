//! Transform node trees.
//!
//! A [`TransformNode`] is a closed expression tree. Each variant owns a fixed
//! number of children, so a tree with the wrong arity cannot be built.
//! Evaluating a node at `(x, y)` evaluates its children first and then
//! combines their colours with the matching [`Colour`] operation.

use std::fmt;

use super::Colour;

/// A node in a random art expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformNode {
    /// The x coordinate on every channel.
    VariableX,
    /// The y coordinate on every channel.
    VariableY,
    /// A fixed colour.
    Constant(Colour),
    /// Average of two colours.
    Sum(Box<TransformNode>, Box<TransformNode>),
    /// Elementwise product of two colours.
    Product(Box<TransformNode>, Box<TransformNode>),
    /// Guarded elementwise remainder.
    Mod(Box<TransformNode>, Box<TransformNode>),
    Well(Box<TransformNode>),
    Tent(Box<TransformNode>),
    /// `sin(phase + freq * input)` per channel.
    Sin {
        phase: f64,
        freq: f64,
        input: Box<TransformNode>,
    },
    /// Per-channel select: `below` where `level < threshold`, else `above`.
    Level {
        threshold: f64,
        level: Box<TransformNode>,
        below: Box<TransformNode>,
        above: Box<TransformNode>,
    },
    /// Blend of `first` and `second`, weighted by the red channel of `weight`.
    Mix {
        weight: Box<TransformNode>,
        first: Box<TransformNode>,
        second: Box<TransformNode>,
    },
}

/// The variant of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    VariableX,
    VariableY,
    Constant,
    Sum,
    Product,
    Mod,
    Well,
    Tent,
    Sin,
    Level,
    Mix,
}

impl NodeKind {
    /// Every kind, leaves first.
    pub const ALL: [NodeKind; 11] = [
        NodeKind::VariableX,
        NodeKind::VariableY,
        NodeKind::Constant,
        NodeKind::Sum,
        NodeKind::Product,
        NodeKind::Mod,
        NodeKind::Well,
        NodeKind::Tent,
        NodeKind::Sin,
        NodeKind::Level,
        NodeKind::Mix,
    ];

    /// Short lowercase name, as used by [`TransformNode::inspect`].
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::VariableX => "variable_x",
            NodeKind::VariableY => "variable_y",
            NodeKind::Constant => "constant",
            NodeKind::Sum => "sum",
            NodeKind::Product => "product",
            NodeKind::Mod => "mod",
            NodeKind::Well => "well",
            NodeKind::Tent => "tent",
            NodeKind::Sin => "sin",
            NodeKind::Level => "level",
            NodeKind::Mix => "mix",
        }
    }

    /// Number of children a node of this kind owns.
    pub fn arity(self) -> usize {
        match self {
            NodeKind::VariableX | NodeKind::VariableY | NodeKind::Constant => 0,
            NodeKind::Well | NodeKind::Tent | NodeKind::Sin => 1,
            NodeKind::Sum | NodeKind::Product | NodeKind::Mod => 2,
            NodeKind::Level | NodeKind::Mix => 3,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TransformNode {
    pub fn variable_x() -> Self {
        TransformNode::VariableX
    }

    pub fn variable_y() -> Self {
        TransformNode::VariableY
    }

    pub fn constant(r: f64, g: f64, b: f64) -> Self {
        TransformNode::Constant(Colour::new(r, g, b))
    }

    pub fn sum(e1: TransformNode, e2: TransformNode) -> Self {
        TransformNode::Sum(Box::new(e1), Box::new(e2))
    }

    pub fn product(e1: TransformNode, e2: TransformNode) -> Self {
        TransformNode::Product(Box::new(e1), Box::new(e2))
    }

    pub fn modulo(e1: TransformNode, e2: TransformNode) -> Self {
        TransformNode::Mod(Box::new(e1), Box::new(e2))
    }

    pub fn well(e: TransformNode) -> Self {
        TransformNode::Well(Box::new(e))
    }

    pub fn tent(e: TransformNode) -> Self {
        TransformNode::Tent(Box::new(e))
    }

    pub fn sin(phase: f64, freq: f64, input: TransformNode) -> Self {
        TransformNode::Sin {
            phase,
            freq,
            input: Box::new(input),
        }
    }

    pub fn level(
        threshold: f64,
        level: TransformNode,
        below: TransformNode,
        above: TransformNode,
    ) -> Self {
        TransformNode::Level {
            threshold,
            level: Box::new(level),
            below: Box::new(below),
            above: Box::new(above),
        }
    }

    pub fn mix(weight: TransformNode, first: TransformNode, second: TransformNode) -> Self {
        TransformNode::Mix {
            weight: Box::new(weight),
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Evaluate the tree at `(x, y)`.
    ///
    /// Pure and total: the same node and coordinates always give the same
    /// colour, and there is no error path.
    pub fn apply(&self, x: f64, y: f64) -> Colour {
        match self {
            TransformNode::VariableX => Colour::splat(x),
            TransformNode::VariableY => Colour::splat(y),
            TransformNode::Constant(c) => *c,
            TransformNode::Sum(e1, e2) => {
                let c1 = e1.apply(x, y);
                let c2 = e2.apply(x, y);
                c1.average(c2, 0.5)
            }
            TransformNode::Product(e1, e2) => {
                let c1 = e1.apply(x, y);
                let c2 = e2.apply(x, y);
                c1.product(c2)
            }
            TransformNode::Mod(e1, e2) => {
                let c1 = e1.apply(x, y);
                let c2 = e2.apply(x, y);
                c1.modulo(c2)
            }
            TransformNode::Well(e) => e.apply(x, y).well(),
            TransformNode::Tent(e) => e.apply(x, y).tent(),
            TransformNode::Sin { phase, freq, input } => input.apply(x, y).sin(*phase, *freq),
            TransformNode::Level {
                threshold,
                level,
                below,
                above,
            } => {
                let l = level.apply(x, y);
                let c1 = below.apply(x, y);
                let c2 = above.apply(x, y);
                l.level(*threshold, c1, c2)
            }
            TransformNode::Mix {
                weight,
                first,
                second,
            } => {
                // Only red drives the blend; green and blue are discarded.
                let w = weight.apply(x, y);
                let c1 = first.apply(x, y);
                let c2 = second.apply(x, y);
                c1.average(c2, 0.5 * (w.r + 1.0))
            }
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TransformNode::VariableX => NodeKind::VariableX,
            TransformNode::VariableY => NodeKind::VariableY,
            TransformNode::Constant(_) => NodeKind::Constant,
            TransformNode::Sum(..) => NodeKind::Sum,
            TransformNode::Product(..) => NodeKind::Product,
            TransformNode::Mod(..) => NodeKind::Mod,
            TransformNode::Well(_) => NodeKind::Well,
            TransformNode::Tent(_) => NodeKind::Tent,
            TransformNode::Sin { .. } => NodeKind::Sin,
            TransformNode::Level { .. } => NodeKind::Level,
            TransformNode::Mix { .. } => NodeKind::Mix,
        }
    }

    pub fn arity(&self) -> usize {
        self.kind().arity()
    }

    /// Direct children in evaluation order.
    pub fn children(&self) -> Vec<&TransformNode> {
        match self {
            TransformNode::VariableX | TransformNode::VariableY | TransformNode::Constant(_) => {
                vec![]
            }
            TransformNode::Well(e) | TransformNode::Tent(e) => vec![&**e],
            TransformNode::Sin { input, .. } => vec![&**input],
            TransformNode::Sum(e1, e2)
            | TransformNode::Product(e1, e2)
            | TransformNode::Mod(e1, e2) => vec![&**e1, &**e2],
            TransformNode::Level {
                level,
                below,
                above,
                ..
            } => vec![&**level, &**below, &**above],
            TransformNode::Mix {
                weight,
                first,
                second,
            } => vec![&**weight, &**first, &**second],
        }
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(TransformNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(TransformNode::node_count)
            .sum::<usize>()
    }
}

/// Renders the whole tree as a nested expression, e.g. `Sum(x, Well(y))`.
impl fmt::Display for TransformNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformNode::VariableX => write!(f, "x"),
            TransformNode::VariableY => write!(f, "y"),
            TransformNode::Constant(c) => write!(f, "Constant{}", c),
            TransformNode::Sum(e1, e2) => write!(f, "Sum({}, {})", e1, e2),
            TransformNode::Product(e1, e2) => write!(f, "Product({}, {})", e1, e2),
            TransformNode::Mod(e1, e2) => write!(f, "Mod({}, {})", e1, e2),
            TransformNode::Well(e) => write!(f, "Well({})", e),
            TransformNode::Tent(e) => write!(f, "Tent({})", e),
            TransformNode::Sin { phase, freq, input } => {
                write!(f, "Sin({} + {} * {})", phase, freq, input)
            }
            TransformNode::Level {
                threshold,
                level,
                below,
                above,
            } => write!(f, "Level({}, {}, {}, {})", threshold, level, below, above),
            TransformNode::Mix {
                weight,
                first,
                second,
            } => write!(f, "Mix({}, {}, {})", weight, first, second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> TransformNode {
        TransformNode::variable_x()
    }

    fn y() -> TransformNode {
        TransformNode::variable_y()
    }

    #[test]
    fn test_variables_are_identity() {
        for &(px, py) in &[(0.0, 0.0), (-1.0, 1.0), (0.25, -0.75), (3.5, 100.0)] {
            assert_eq!(x().apply(px, py), Colour::splat(px));
            assert_eq!(y().apply(px, py), Colour::splat(py));
        }
    }

    #[test]
    fn test_constant_ignores_coordinates() {
        let node = TransformNode::constant(0.1, 0.2, 0.3);
        assert_eq!(node.apply(0.0, 0.0), Colour::new(0.1, 0.2, 0.3));
        assert_eq!(node.apply(-1.0, 0.5), Colour::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_sum_of_constants() {
        let node = TransformNode::sum(
            TransformNode::constant(1.0, 0.0, 0.0),
            TransformNode::constant(0.0, 1.0, 0.0),
        );
        assert_eq!(node.apply(0.3, -0.8), Colour::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_product() {
        let node = TransformNode::product(x(), y());
        assert_eq!(node.apply(0.5, -0.5), Colour::splat(-0.25));
    }

    #[test]
    fn test_mod_guard_zeroes_all_channels() {
        // Only the green divisor channel is near zero
        let node = TransformNode::modulo(
            TransformNode::constant(0.7, 0.7, 0.7),
            TransformNode::constant(0.5, 0.0, 0.5),
        );
        assert_eq!(node.apply(0.0, 0.0), Colour::BLACK);
    }

    #[test]
    fn test_mod_divides_when_guard_passes() {
        let node = TransformNode::modulo(x(), TransformNode::constant(0.3, 0.4, 0.5));
        let c = node.apply(0.9, 0.0);
        assert_eq!(c, Colour::new(0.9 % 0.3, 0.9 % 0.4, 0.9 % 0.5));
    }

    #[test]
    fn test_mod_with_variable_divisor() {
        // y is negative, so the guard trips
        let node = TransformNode::modulo(x(), y());
        assert_eq!(node.apply(0.5, -0.2), Colour::BLACK);
        assert_eq!(node.apply(0.5, 0.2), Colour::splat(0.5 % 0.2));
    }

    #[test]
    fn test_well_and_tent() {
        assert_eq!(TransformNode::well(x()).apply(0.0, 0.0), Colour::splat(-1.0));
        assert_eq!(TransformNode::tent(x()).apply(0.0, 0.0), Colour::splat(1.0));
        assert_eq!(TransformNode::tent(y()).apply(0.0, -0.25), Colour::splat(0.5));
    }

    #[test]
    fn test_sin() {
        let node = TransformNode::sin(0.5, 2.0, x());
        assert_eq!(node.apply(0.25, 0.0), Colour::splat((0.5f64 + 2.0 * 0.25).sin()));
    }

    #[test]
    fn test_level_channel_independence() {
        let node = TransformNode::level(
            0.0,
            TransformNode::constant(-0.5, 0.5, 0.0),
            TransformNode::constant(1.0, 1.0, 1.0),
            TransformNode::constant(2.0, 2.0, 2.0),
        );
        let c = node.apply(0.0, 0.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 2.0);
        // Equal to threshold goes to the second colour
        assert_eq!(c.b, 2.0);
    }

    #[test]
    fn test_mix_uses_red_channel_only() {
        let first = TransformNode::constant(0.2, 0.4, 0.6);
        let second = TransformNode::constant(-1.0, -1.0, -1.0);

        let node = TransformNode::mix(
            TransformNode::constant(1.0, -1.0, -1.0),
            first.clone(),
            second.clone(),
        );
        assert_eq!(node.apply(0.0, 0.0), Colour::new(0.2, 0.4, 0.6));

        let node = TransformNode::mix(TransformNode::constant(-1.0, 1.0, 1.0), first, second);
        assert_eq!(node.apply(0.0, 0.0), Colour::splat(-1.0));
    }

    #[test]
    fn test_mix_midpoint() {
        let node = TransformNode::mix(
            TransformNode::constant(0.0, 0.9, 0.9),
            TransformNode::constant(1.0, 1.0, 1.0),
            TransformNode::constant(0.0, 0.0, 0.0),
        );
        assert_eq!(node.apply(0.0, 0.0), Colour::splat(0.5));
    }

    #[test]
    fn test_apply_is_deterministic() {
        let node = TransformNode::mix(
            TransformNode::sin(1.3, 4.2, TransformNode::product(x(), y())),
            TransformNode::well(TransformNode::modulo(x(), TransformNode::constant(0.3, 0.6, 0.9))),
            TransformNode::level(0.1, TransformNode::tent(y()), x(), y()),
        );
        for i in 0..20 {
            let px = -1.0 + i as f64 * 0.1;
            let py = 1.0 - i as f64 * 0.07;
            let a = node.apply(px, py);
            let b = node.apply(px, py);
            assert_eq!(a.r.to_bits(), b.r.to_bits());
            assert_eq!(a.g.to_bits(), b.g.to_bits());
            assert_eq!(a.b.to_bits(), b.b.to_bits());
        }
    }

    #[test]
    fn test_kind_and_arity() {
        assert_eq!(x().arity(), 0);
        assert_eq!(TransformNode::well(x()).arity(), 1);
        assert_eq!(TransformNode::sum(x(), y()).arity(), 2);
        assert_eq!(TransformNode::mix(x(), y(), x()).kind(), NodeKind::Mix);
        for kind in NodeKind::ALL {
            assert!(kind.arity() <= 3);
        }
    }

    #[test]
    fn test_children_match_arity() {
        let nodes = vec![
            x(),
            TransformNode::constant(0.0, 0.0, 0.0),
            TransformNode::sin(0.0, 1.0, y()),
            TransformNode::modulo(x(), y()),
            TransformNode::level(0.0, x(), y(), x()),
        ];
        for node in &nodes {
            assert_eq!(node.children().len(), node.arity());
        }
    }

    #[test]
    fn test_depth_and_count() {
        let node = TransformNode::sum(TransformNode::well(x()), y());
        assert_eq!(node.depth(), 3);
        assert_eq!(node.node_count(), 4);
        assert_eq!(x().depth(), 1);
    }

    #[test]
    fn test_display_recursive() {
        let node = TransformNode::mix(
            x(),
            TransformNode::sin(0.5, 2.0, y()),
            TransformNode::level(-0.25, TransformNode::constant(0.5, 0.25, 1.0), x(), y()),
        );
        insta::assert_snapshot!(
            node.to_string(),
            @"Mix(x, Sin(0.5 + 2 * y), Level(-0.25, Constant(0.5, 0.25, 1), x, y))"
        );
    }

    #[test]
    fn test_tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransformNode>();
    }
}
