use crate::spec::FieldKind;
use crate::spec::NodeBuilder;
use crate::spec::NodeType;
use crate::spec::NodeTypeId;
use crate::spec::SpecBuildError;
use crate::spec::SpecificationBuilder;
use crate::spec::SupportHooks;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// One level of module nesting the generated code is placed in.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Namespace {
    pub doc: Option<String>,
    pub name: String,
}

/// A resolved and validated tree specification.
///
/// Produced by [`SpecificationBuilder::build`](crate::spec::SpecificationBuilder::build)
/// and immutable thereafter. Node types are kept in declaration order, which
/// is not necessarily ancestor-first; see
/// [`GenerationPlan`](crate::plan::GenerationPlan) for the order backends
/// generate in.
///
/// A deserialized specification is rebuilt through a
/// [`SpecificationBuilder`], so it passes the same checks as a built one.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "SpecificationData")]
pub struct Specification {
    pub(crate) header_doc: Option<String>,
    pub(crate) hooks: SupportHooks,
    pub(crate) includes: Vec<String>,
    pub(crate) namespaces: Vec<Namespace>,
    pub(crate) nodes: IndexMap<String, NodeType>,
    pub(crate) source_doc: Option<String>,
    pub(crate) src_includes: Vec<String>,
}
impl Specification {
    pub fn get_node(&self, snake_case_name: &str) -> Option<&NodeType> {
        self.nodes.get(snake_case_name)
    }

    pub fn header_doc(&self) -> Option<&str> {
        self.header_doc.as_deref()
    }

    pub fn hooks(&self) -> &SupportHooks {
        &self.hooks
    }

    /// Extra `use` paths for the generated type definitions.
    pub fn includes(&self) -> &[String] {
        self.includes.as_slice()
    }

    pub fn namespaces(&self) -> &[Namespace] {
        self.namespaces.as_slice()
    }

    /// Ids handed out by the builder of this specification are always valid
    /// indices.
    pub fn node(&self, id: NodeTypeId) -> &NodeType {
        &self.nodes[id.0]
    }

    /// All node types in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeType> {
        self.nodes.values()
    }

    pub fn source_doc(&self) -> Option<&str> {
        self.source_doc.as_deref()
    }

    /// Extra `use` paths for the generated trait implementations.
    pub fn src_includes(&self) -> &[String] {
        self.src_includes.as_slice()
    }
}

/// The serialized form of a [`Specification`], not yet validated.
#[derive(Deserialize)]
struct SpecificationData {
    header_doc: Option<String>,
    hooks: SupportHooks,
    includes: Vec<String>,
    namespaces: Vec<Namespace>,
    nodes: IndexMap<String, NodeType>,
    source_doc: Option<String>,
    src_includes: Vec<String>,
}
impl TryFrom<SpecificationData> for Specification {
    type Error = SpecBuildError;

    fn try_from(data: SpecificationData) -> Result<Self, SpecBuildError> {
        let mut builder = SpecificationBuilder::new();
        let hooks = data.hooks;
        builder.set_initialize_function(&hooks.initialize_function)?;
        if let Some(serdes) = &hooks.serdes_functions {
            builder.set_serdes_functions(&serdes.serialize, &serdes.deserialize)?;
        }
        if let Some(location) = &hooks.source_location {
            builder.set_source_location(location)?;
        }
        builder.set_support_namespace(&hooks.support_namespace)?;
        builder.set_tree_namespace(&hooks.tree_namespace)?;
        if let Some(doc) = &data.header_doc {
            builder.set_header_doc(doc);
        }
        if let Some(doc) = &data.source_doc {
            builder.set_source_doc(doc);
        }
        for ns in &data.namespaces {
            builder.add_namespace(&ns.name, ns.doc.as_deref());
        }
        for include in &data.includes {
            builder.add_include(include);
        }
        for include in &data.src_includes {
            builder.add_src_include(include);
        }

        for (name, node) in &data.nodes {
            let mut decl = NodeBuilder::new(name, &node.doc);
            if let Some(parent) = node.parent {
                decl = decl.derive_from(parent);
            }
            for field in &node.fields {
                decl = match &field.kind {
                    FieldKind::Node { edge, target } => {
                        let Some((target_name, _)) = data.nodes.get_index(target.0) else {
                            return Err(SpecBuildError::UndefinedNodeType {
                                node_name: name.to_string(),
                                field_name: field.name.to_string(),
                                target_name: format!("#{}", target.0),
                            });
                        };
                        decl.with_child(*edge, target_name, &field.name, &field.doc)
                    },
                    FieldKind::Primitive { edge, type_path } =>
                        decl.with_prim(type_path, &field.name, &field.doc, *edge),
                };
            }
            if let Some(order) = &node.order {
                decl = decl.with_order(order.clone());
            }
            if node.is_error_marker {
                decl = decl.mark_error();
            }
            builder.add_node(decl)?;
        }
        builder.build()
    }
}
