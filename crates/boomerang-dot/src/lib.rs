//! Generate Graphviz DOT visualizations from boomerang flights.
//!
//! Renders a [`Flight`] as a DOT digraph: the start value 1 becomes an
//! ellipse, each step becomes a box node colored by the move that
//! produced it (blue for `+r`, green for `inv`), and edges follow the
//! move order. The returning node is drawn bold.
//!
//! # Example
//!
//! ```
//! use boomerang::v1::{Bounds, Offset, plan_flight};
//! use boomerang_dot::{render, RenderOptions};
//!
//! let offset = Offset::new(1, 2).unwrap();
//! let flight = plan_flight(offset, &Bounds::default()).unwrap();
//!
//! let dot = render(&flight, &RenderOptions::default());
//! assert!(dot.contains("digraph boomerang"));
//! assert!(dot.contains("3/2"));
//! ```
//!
//! Pipe the output through Graphviz to produce images:
//!
//! ```bash
//! boomerang search 1/2 --json | boomerang render dot | dot -Tpng -o flight.png
//! ```

use boomerang::v1::{Flight, Op};

/// Options controlling what information is rendered in the DOT output.
pub struct RenderOptions {
    /// Label each edge with the move applied (`+r` / `inv`).
    pub show_ops: bool,
    /// Number each step node below its value.
    pub show_step_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_ops: true,
            show_step_numbers: false,
        }
    }
}

/// Render a [`Flight`] to a Graphviz DOT string.
pub fn render(flight: &Flight, options: &RenderOptions) -> String {
    let mut dot = String::new();
    dot.push_str("digraph boomerang {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box, style=rounded, fontname=\"Helvetica\"];\n");
    dot.push_str("  edge [color=\"#666666\"];\n\n");

    dot.push_str("  labelloc=\"t\";\n");
    dot.push_str(&format!(
        "  label=\"r = {}\";\n",
        escape_dot(&flight.offset.to_string())
    ));
    dot.push_str("  fontname=\"Helvetica-Bold\";\n\n");

    // Start node
    dot.push_str("  \"__start__\" [label=<<b>1</b>>, shape=ellipse, style=filled, fillcolor=\"#e0e0e0\"];\n");

    // Step nodes
    let last = flight.steps.len();
    for (i, step) in flight.steps.iter().enumerate() {
        let number = i + 1;
        let label = format_step_label_html(step.value.to_string().as_str(), number, options);
        let is_return = number == last;

        let (style, penwidth) = if is_return {
            ("rounded,filled,bold", "3")
        } else {
            ("rounded,filled", "1")
        };
        dot.push_str(&format!(
            "  \"s{}\" [label={}, fillcolor=\"{}\", style=\"{}\", penwidth={}];\n",
            number,
            label,
            op_color(step.op),
            style,
            penwidth
        ));
    }

    dot.push('\n');

    // Edges in move order
    for (i, step) in flight.steps.iter().enumerate() {
        let from = if i == 0 {
            "\"__start__\"".to_string()
        } else {
            format!("\"s{}\"", i)
        };
        if options.show_ops {
            dot.push_str(&format!(
                "  {} -> \"s{}\" [label=\"{}\"];\n",
                from,
                i + 1,
                escape_dot(&step.op.to_string())
            ));
        } else {
            dot.push_str(&format!("  {} -> \"s{}\";\n", from, i + 1));
        }
    }

    dot.push_str("}\n");
    dot
}

fn format_step_label_html(value: &str, number: usize, options: &RenderOptions) -> String {
    let mut rows = vec![format!("<b>{}</b>", escape_html(value))];
    if options.show_step_numbers {
        rows.push(format!(
            "<font point-size=\"9\" color=\"#666666\">#{}</font>",
            number
        ));
    }
    format!("<{}>", rows.join("<br/>"))
}

/// Return a fill color for the move that produced a node.
pub fn op_color(op: Op) -> &'static str {
    match op {
        Op::AddOffset => "#cce5ff", // Light blue
        Op::Invert => "#d4edda",    // Light green
    }
}

/// Escape a string for use in DOT label attributes (double-quoted context).
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Escape a string for use inside HTML-like DOT labels.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
