use serde::Deserialize;
use serde::Serialize;

/// The six ways a field may refer to other nodes.
///
/// `Maybe`, `One`, `Any` and `Many` are *owning* edges: a node reached
/// through one of them belongs to exactly one place in the tree. `Link` and
/// `OptLink` are non-owning references to a node that must be owned (and
/// therefore reachable) somewhere else in the same tree.
///
/// Primitive fields may also carry an edge kind, in which case it only
/// describes cardinality.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum EdgeKind {
    Maybe,
    One,
    Any,
    Many,
    OptLink,
    Link,
}
impl EdgeKind {
    pub const ALL: [EdgeKind; 6] = [
        EdgeKind::Maybe,
        EdgeKind::One,
        EdgeKind::Any,
        EdgeKind::Many,
        EdgeKind::OptLink,
        EdgeKind::Link,
    ];

    pub fn from_wire_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wire_tag() == tag)
    }

    /// Suffix appended to a target's name when drawing the edge in a
    /// documentation graph.
    pub fn graph_label_suffix(&self) -> &'static str {
        match self {
            EdgeKind::Maybe => "?",
            EdgeKind::One => "",
            EdgeKind::Any => "*",
            EdgeKind::Many => "+",
            EdgeKind::OptLink => "@?",
            EdgeKind::Link => "@",
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, EdgeKind::Link | EdgeKind::OptLink)
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, EdgeKind::Any | EdgeKind::Many)
    }

    pub fn is_owning(&self) -> bool {
        !self.is_link()
    }

    /// Whether a complete tree must populate an edge of this kind (at least
    /// one element, for list kinds).
    pub fn is_required(&self) -> bool {
        matches!(self, EdgeKind::One | EdgeKind::Many | EdgeKind::Link)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EdgeKind::Maybe => "Maybe",
            EdgeKind::One => "One",
            EdgeKind::Any => "Any",
            EdgeKind::Many => "Many",
            EdgeKind::OptLink => "OptLink",
            EdgeKind::Link => "Link",
        }
    }

    /// The value written under the `@T` key of a field submap.
    pub fn wire_tag(&self) -> &'static str {
        match self {
            EdgeKind::Maybe => "?",
            EdgeKind::One => "1",
            EdgeKind::Any => "*",
            EdgeKind::Many => "+",
            EdgeKind::OptLink => "@",
            EdgeKind::Link => "$",
        }
    }
}
impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
