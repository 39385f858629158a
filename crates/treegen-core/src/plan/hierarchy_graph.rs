use crate::EdgeKind;
use crate::spec::FieldKind;
use crate::spec::Specification;
use std::fmt::Write;

/// Renders the node type hierarchy and the edges between node types as a
/// graphviz digraph, for embedding in generated documentation.
///
/// Abstract node types are drawn dotted, inheritance as open dotted arrows.
/// Edge arrows are labeled with the field name and the edge kind's suffix.
pub fn hierarchy_graph(spec: &Specification) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_graph(spec, &mut out);
    out
}

fn write_graph(spec: &Specification, out: &mut String) -> std::fmt::Result {
    writeln!(out, "digraph tree {{")?;
    writeln!(out, "  node [shape=record, fontname=Helvetica, fontsize=10];")?;
    for node in spec.nodes() {
        let name = node.title_case_name();
        let style = if node.is_leaf() { "" } else { ", style=dotted" };
        writeln!(out, "  {name} [ label=\"{name}\"{style} ];")?;
    }
    for node in spec.nodes() {
        if let Some(parent) = node.parent(spec) {
            writeln!(
                out,
                "  {} -> {} [ arrowhead=open, style=dotted ];",
                parent.title_case_name(),
                node.title_case_name(),
            )?;
        }
    }

    let mut prim_id = 0;
    for node in spec.nodes() {
        for field in node.fields() {
            let to = match field.kind() {
                FieldKind::Node { target, .. } =>
                    spec.node(*target).title_case_name().to_string(),

                FieldKind::Primitive { type_path, .. } => {
                    let brief = type_path.rsplit("::").next().unwrap_or(type_path);
                    let id = format!("prim{prim_id}");
                    prim_id += 1;
                    writeln!(out, "  {id} [ label=\"{brief}\" ];")?;
                    id
                },
            };
            let (suffix, arrowhead, style) = match field.ext_type() {
                Some(edge) => (edge.graph_label_suffix(), arrowhead(edge), line_style(edge)),
                None => ("", "normal", "solid"),
            };
            writeln!(
                out,
                "  {} -> {to} [ label=\"{}{suffix}\", arrowhead={arrowhead}, style={style} ];",
                node.title_case_name(),
                field.name(),
            )?;
        }
    }
    writeln!(out, "}}")
}

fn arrowhead(edge: EdgeKind) -> &'static str {
    match edge {
        EdgeKind::Maybe | EdgeKind::Any | EdgeKind::OptLink => "open",
        EdgeKind::One | EdgeKind::Many | EdgeKind::Link => "normal",
    }
}

fn line_style(edge: EdgeKind) -> &'static str {
    match edge {
        EdgeKind::Maybe | EdgeKind::One => "solid",
        EdgeKind::Any | EdgeKind::Many => "bold",
        EdgeKind::OptLink | EdgeKind::Link => "dashed",
    }
}
