use crate::EdgeKind;
use crate::spec::Field;
use crate::spec::FieldKind;
use crate::spec::Namespace;
use crate::spec::NodeBuilder;
use crate::spec::NodeType;
use crate::spec::NodeTypeId;
use crate::spec::SerDesFunctions;
use crate::spec::SpecBuildError;
use crate::spec::Specification;
use crate::spec::SupportHooks;
use crate::spec::node_builder::FieldDeclKind;
use crate::spec::support_hooks::DEFAULT_SUPPORT_NAMESPACE;
use crate::title_case;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SpecBuildError>;

/// Collects node type declarations and generator-wide settings, then
/// resolves them into a [`Specification`].
///
/// ```
/// use treegen_core::EdgeKind;
/// use treegen_core::spec::NodeBuilder;
/// use treegen_core::spec::SpecificationBuilder;
///
/// let mut builder = SpecificationBuilder::new();
/// builder.set_initialize_function("treegen_runtime::primitives::initialize")?;
/// builder.add_node(
///     NodeBuilder::new("drive", "A drive.")
///         .with_child(EdgeKind::One, "directory", "root_dir", "Root directory."),
/// )?;
/// builder.add_node(NodeBuilder::new("directory", "A directory."))?;
/// let spec = builder.build()?;
/// assert_eq!(spec.nodes().count(), 2);
/// # Ok::<(), treegen_core::SpecBuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct SpecificationBuilder {
    header_doc: Option<String>,
    includes: Vec<String>,
    initialize_function: Option<String>,
    namespaces: Vec<Namespace>,
    nodes: IndexMap<String, NodeBuilder>,
    serdes_functions: Option<SerDesFunctions>,
    source_doc: Option<String>,
    source_location: Option<String>,
    src_includes: Vec<String>,
    support_namespace: Option<String>,
    tree_namespace: Option<String>,
}
impl SpecificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_include(&mut self, path: &str) {
        self.includes.push(path.to_string());
    }

    pub fn add_namespace(&mut self, name: &str, doc: Option<&str>) {
        self.namespaces.push(Namespace {
            doc: doc.map(str::to_string),
            name: name.to_string(),
        });
    }

    /// Registers a node type declaration.
    ///
    /// A node type may only derive from a node type that was added before
    /// it, so the type hierarchy cannot contain cycles.
    pub fn add_node(&mut self, node: NodeBuilder) -> Result<NodeTypeId> {
        if self.nodes.contains_key(&node.name) {
            return Err(SpecBuildError::DuplicateNodeDefinition {
                node_name: node.name,
            });
        }
        if let Some(parent) = node.parent
            && parent.0 >= self.nodes.len() {
            return Err(SpecBuildError::UnknownParentNode {
                node_name: node.name,
                parent,
            });
        }
        let id = NodeTypeId(self.nodes.len());
        self.nodes.insert(node.name.to_string(), node);
        Ok(id)
    }

    pub fn add_src_include(&mut self, path: &str) {
        self.src_includes.push(path.to_string());
    }

    pub fn build(self) -> Result<Specification> {
        let Some(initialize_function) = self.initialize_function else {
            return Err(SpecBuildError::MissingInitializeFunction);
        };
        let support_namespace = self.support_namespace
            .unwrap_or_else(|| DEFAULT_SUPPORT_NAMESPACE.to_string());
        let tree_namespace = self.tree_namespace
            .unwrap_or_else(|| support_namespace.to_string());

        let mut nodes = IndexMap::with_capacity(self.nodes.len());
        for (index, (name, builder)) in self.nodes.iter().enumerate() {
            let mut fields = Vec::with_capacity(builder.fields.len());
            for decl in &builder.fields {
                let kind = match &decl.kind {
                    FieldDeclKind::Node { edge, target_name } => {
                        let Some(target) = self.nodes.get_index_of(target_name) else {
                            return Err(SpecBuildError::UndefinedNodeType {
                                node_name: name.to_string(),
                                field_name: decl.name.to_string(),
                                target_name: target_name.to_string(),
                            });
                        };
                        log::trace!(
                            "resolved field `{name}.{}` to node type `{target_name}`",
                            decl.name,
                        );
                        FieldKind::Node {
                            edge: *edge,
                            target: NodeTypeId(target),
                        }
                    },

                    FieldDeclKind::Primitive { edge, type_path } => {
                        if let Some(edge @ (EdgeKind::Link | EdgeKind::OptLink)) = edge {
                            return Err(SpecBuildError::PrimitiveLink {
                                node_name: name.to_string(),
                                field_name: decl.name.to_string(),
                                edge: *edge,
                            });
                        }
                        FieldKind::Primitive {
                            edge: *edge,
                            type_path: type_path.to_string(),
                        }
                    },
                };
                fields.push(Field {
                    doc: decl.doc.to_string(),
                    kind,
                    name: decl.name.to_string(),
                });
            }

            nodes.insert(name.to_string(), NodeType {
                derived: vec![],
                doc: builder.doc.to_string(),
                fields,
                id: NodeTypeId(index),
                is_error_marker: builder.is_error_marker,
                order: builder.order.clone(),
                parent: builder.parent,
                snake_case_name: name.to_string(),
                title_case_name: title_case(name),
            });
        }

        for index in 0..nodes.len() {
            if let Some(parent) = nodes[index].parent {
                nodes[parent.0].derived.push(NodeTypeId(index));
            }
        }

        let spec = Specification {
            header_doc: self.header_doc,
            hooks: SupportHooks {
                initialize_function,
                serdes_functions: self.serdes_functions,
                source_location: self.source_location,
                support_namespace,
                tree_namespace,
            },
            includes: self.includes,
            namespaces: self.namespaces,
            nodes,
            source_doc: self.source_doc,
            src_includes: self.src_includes,
        };

        for node in spec.nodes() {
            let mut seen = HashSet::new();
            let inherited = node.ancestors(&spec)
                .into_iter()
                .flat_map(|ancestor| ancestor.fields.iter());
            for field in inherited.chain(node.fields.iter()) {
                if !seen.insert(field.name()) {
                    return Err(SpecBuildError::DuplicateFieldDefinition {
                        node_name: node.snake_case_name.to_string(),
                        field_name: field.name.to_string(),
                    });
                }
            }
            node.all_fields(&spec)?;
        }

        log::debug!("resolved {} node types", spec.nodes.len());
        Ok(spec)
    }

    pub fn set_header_doc(&mut self, doc: &str) {
        self.header_doc = Some(doc.to_string());
    }

    pub fn set_initialize_function(&mut self, path: &str) -> Result<()> {
        set_once(&mut self.initialize_function, path, "initialization function")
    }

    pub fn set_serdes_functions(
        &mut self,
        serialize: &str,
        deserialize: &str,
    ) -> Result<()> {
        if self.serdes_functions.is_some() {
            return Err(SpecBuildError::DuplicateConfiguration {
                setting: "serialize/deserialize function",
            });
        }
        self.serdes_functions = Some(SerDesFunctions {
            deserialize: deserialize.to_string(),
            serialize: serialize.to_string(),
        });
        Ok(())
    }

    pub fn set_source_doc(&mut self, doc: &str) {
        self.source_doc = Some(doc.to_string());
    }

    pub fn set_source_location(&mut self, type_path: &str) -> Result<()> {
        set_once(&mut self.source_location, type_path, "source location object")
    }

    pub fn set_support_namespace(&mut self, path: &str) -> Result<()> {
        set_once(&mut self.support_namespace, path, "support namespace")
    }

    pub fn set_tree_namespace(&mut self, path: &str) -> Result<()> {
        set_once(&mut self.tree_namespace, path, "tree namespace")
    }
}

fn set_once(
    slot: &mut Option<String>,
    value: &str,
    setting: &'static str,
) -> Result<()> {
    if slot.is_some() {
        return Err(SpecBuildError::DuplicateConfiguration { setting });
    }
    *slot = Some(value.to_string());
    Ok(())
}
