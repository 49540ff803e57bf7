//! Inspect command implementation.
//!
//! Generates a tree and prints its full expression to stdout. With
//! `--nodes`, also prints a one-line description of every node, indented by
//! depth.

use clap::Args;

use crate::error::Result;
use crate::generate::Generator;
use crate::output::{plural, Printer};
use crate::types::TransformNode;

/// Print a generated tree and describe its nodes
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Seed for the generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of operator nodes in the tree
    #[arg(long, default_value = "20")]
    pub complexity: usize,

    /// List every node with its parameters
    #[arg(long)]
    pub nodes: bool,

    /// Maximum bytes per node description
    #[arg(long, default_value = "80")]
    pub width: usize,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let tree = Generator::new(seed).generate(args.complexity);

    printer.info(
        "Generated",
        &format!(
            "seed {} ({}, depth {})",
            seed,
            plural(tree.node_count(), "node", "nodes"),
            tree.depth()
        ),
    );

    println!("{}", tree);

    if args.nodes {
        for line in node_lines(&tree, args.width) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Describe every node in pre-order, two spaces of indent per level.
///
/// Descriptions longer than `width` bytes are cut and suffixed with the
/// number of bytes dropped.
pub fn node_lines(tree: &TransformNode, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buf = vec![0u8; width];
    collect_lines(tree, 0, &mut buf, &mut lines);
    lines
}

fn collect_lines(node: &TransformNode, depth: usize, buf: &mut [u8], lines: &mut Vec<String>) {
    let described = node.inspect(buf);
    let mut line = format!("{}{}", "  ".repeat(depth), described.text);
    if described.is_truncated() {
        line.push_str(&format!(" [+{}]", described.required - described.text.len()));
    }
    lines.push(line);

    for child in node.children() {
        collect_lines(child, depth + 1, buf, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_lines_preorder() {
        let tree = TransformNode::sum(
            TransformNode::well(TransformNode::variable_x()),
            TransformNode::sin(0.5, 2.0, TransformNode::variable_y()),
        );
        let lines = node_lines(&tree, 80);
        assert_eq!(
            lines,
            vec![
                "sum(..., ...)",
                "  well(...)",
                "    variable_x()",
                "  sin(phase=0.500000, freq=2.000000, ...)",
                "    variable_y()",
            ]
        );
    }

    #[test]
    fn test_node_lines_truncated() {
        let tree = TransformNode::constant(0.25, 0.5, 0.75);
        let lines = node_lines(&tree, 8);
        assert_eq!(lines, vec!["constant [+36]"]);
    }

    #[test]
    fn test_run_prints_tree() {
        let args = InspectArgs {
            seed: Some(11),
            complexity: 4,
            nodes: true,
            width: 40,
        };
        run(args, &Printer::new(true)).unwrap();
    }
}
