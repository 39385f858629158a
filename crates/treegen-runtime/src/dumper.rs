use crate::NodeRef;
use crate::PointerMap;
use crate::TreeNode;
use std::collections::HashSet;
use std::fmt::Write;

/// Writes a human-readable, indented rendering of a tree.
///
/// ```text
/// Drive(
///   letter: Letter('A')
///   root_dir: <
///     Directory(
///       name: ""
///       entries: []
///     )
///   >
/// )
/// ```
///
/// Owned children are nested between `<` and `>` (or `[` and `]` for
/// lists). Link targets are expanded one level deep; links inside an
/// expanded link print `...`. When sequence numbers are available every
/// node header carries `@seq` and links print `Type@seq` instead. A node
/// met again in the same dump is then printed as `Type@seq` only, so trees
/// that own a node twice or own themselves still terminate.
pub struct Dumper<'a> {
    ids: Option<&'a PointerMap>,
    in_link: bool,
    indent: usize,
    out: &'a mut dyn Write,
    seen: HashSet<usize>,
}
impl<'a> Dumper<'a> {
    pub fn new(out: &'a mut dyn Write, ids: Option<&'a PointerMap>) -> Self {
        Self {
            ids,
            in_link: false,
            indent: 0,
            out,
            seen: HashSet::new(),
        }
    }

    /// Writes an owned child on the lines following a field label.
    pub fn child<N: TreeNode>(&mut self, node: &NodeRef<N>) -> std::fmt::Result {
        writeln!(self.out, "<")?;
        self.nested(|dumper| dumper.node(node))?;
        self.write_indent()?;
        writeln!(self.out, ">")
    }

    pub fn children<N: TreeNode>(&mut self, nodes: &[NodeRef<N>]) -> std::fmt::Result {
        writeln!(self.out, "[")?;
        self.nested(|dumper| nodes.iter().try_for_each(|node| dumper.node(node)))?;
        self.write_indent()?;
        writeln!(self.out, "]")
    }

    /// Starts a field line: indentation, the field name and `separator`.
    pub fn field(&mut self, name: &str, separator: &str) -> std::fmt::Result {
        self.write_indent()?;
        write!(self.out, "{name}{separator}")
    }

    /// Writes the target of a link field. `kind` names the link's target
    /// kind.
    pub fn link<N: TreeNode>(&mut self, kind: &str, target: &NodeRef<N>) -> std::fmt::Result {
        if let Some(ids) = self.ids {
            return match ids.get(target) {
                Some(seq) => writeln!(self.out, "{kind}@{seq}"),
                None => writeln!(self.out, "{kind}@?"),
            };
        }
        writeln!(self.out, "<")?;
        if self.in_link {
            self.nested(|dumper| {
                dumper.write_indent()?;
                writeln!(dumper.out, "...")
            })?;
        } else {
            self.in_link = true;
            let result = self.nested(|dumper| dumper.node(target));
            self.in_link = false;
            result?;
        }
        self.write_indent()?;
        writeln!(self.out, ">")
    }

    /// Ends a field line with a marker for an empty edge.
    pub fn marker(&mut self, marker: &str) -> std::fmt::Result {
        writeln!(self.out, "{marker}")
    }

    pub fn node<N: TreeNode>(&mut self, node: &NodeRef<N>) -> std::fmt::Result {
        let inner = node.borrow();
        self.write_indent()?;
        write!(self.out, "{}", inner.type_tag())?;
        if let Some(seq) = self.ids.and_then(|ids| ids.get(node)) {
            write!(self.out, "@{seq}")?;
            if !self.seen.insert(node.addr()) {
                return writeln!(self.out);
            }
        }
        write!(self.out, "(")?;
        if let Some(location) = inner.source_location() {
            write!(self.out, " # {location}")?;
        }
        writeln!(self.out)?;
        self.nested(|dumper| inner.dump_fields(dumper))?;
        self.write_indent()?;
        writeln!(self.out, ")")
    }

    /// Writes a complete primitive field line. Values whose debug
    /// rendering spans several lines are written as an indented block
    /// between `type_name<<` and `>>`.
    pub fn primitive<P: std::fmt::Debug>(
        &mut self,
        name: &str,
        type_name: &str,
        value: &P,
    ) -> std::fmt::Result {
        self.field(name, ": ")?;
        let rendered = format!("{value:?}");
        let rendered = rendered.trim_end();
        if !rendered.contains('\n') {
            return writeln!(self.out, "{rendered}");
        }
        writeln!(self.out, "{type_name}<<")?;
        self.nested(|dumper| {
            for line in rendered.lines() {
                dumper.write_indent()?;
                writeln!(dumper.out, "{line}")?;
            }
            Ok(())
        })?;
        self.write_indent()?;
        writeln!(self.out, ">>")
    }

    fn nested<F>(&mut self, body: F) -> std::fmt::Result
    where
        F: FnOnce(&mut Self) -> std::fmt::Result,
    {
        self.indent += 1;
        let result = body(self);
        self.indent -= 1;
        result
    }

    fn write_indent(&mut self) -> std::fmt::Result {
        for _ in 0..self.indent {
            self.out.write_str("  ")?;
        }
        Ok(())
    }
}
