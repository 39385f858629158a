use crate::EdgeKind;
use crate::codegen::Backend;
use crate::codegen::CodegenError;
use crate::codegen::GeneratedFile;
use crate::plan::FieldPlan;
use crate::plan::FieldRole;
use crate::plan::GenerationPlan;
use crate::plan::NodePlan;
use crate::plan::VisitFallback;
use crate::plan::hierarchy_graph;
use crate::spec::FieldKind;
use crate::spec::NodeType;
use crate::spec::SerDesFunctions;
use inherent::inherent;
use proc_macro2::Ident;
use proc_macro2::Literal;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::format_ident;
use quote::quote;
use std::collections::BTreeSet;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, CodegenError>;

/// Type names the generated module defines or imports itself.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Annotations",
    "Any",
    "Dumper",
    "Edge",
    "EqualityContext",
    "IdentifierMap",
    "IsA",
    "Kind",
    "Leaf",
    "Link",
    "Many",
    "MapReader",
    "MapWriter",
    "Maybe",
    "Node",
    "NodeRef",
    "NodeType",
    "NotWellFormed",
    "One",
    "OptLink",
    "PointerMap",
    "RecursiveVisitor",
    "SchemaValidationError",
    "SerializableNode",
    "TreeError",
    "TreeNode",
    "Visitor",
];

/// Emits a single Rust module implementing the tree on top of
/// `treegen-runtime`.
///
/// The module is named after the first namespace of the specification
/// (`tree` when there is none); further namespaces become nested modules.
#[derive(Clone, Debug, Default)]
pub struct RustBackend;
impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

#[inherent]
impl Backend for RustBackend {
    pub fn name(&self) -> &str {
        "rust"
    }

    pub fn generate(&self, plan: &GenerationPlan<'_>) -> Result<Vec<GeneratedFile>> {
        let spec = plan.spec();
        let file_stem = spec.namespaces()
            .first()
            .map(|ns| ns.name.clone())
            .unwrap_or_else(|| "tree".to_string());
        let path = PathBuf::from(format!("{file_stem}.rs"));

        let tokens = RustEmitter::new(plan)?.emit()?;
        let code = tokens.to_string();
        syn::parse_file(&code).map_err(|err| CodegenError::MalformedOutput {
            file: path.display().to_string(),
            message: err.to_string(),
        })?;
        log::debug!("emitting {} ({} node types)", path.display(), plan.nodes().len());

        Ok(vec![GeneratedFile {
            contents: format!("// Generated by treegen. Do not edit.\n\n{code}\n"),
            path,
        }])
    }
}

/// Resolved paths of the hooks the generated code calls.
struct Hooks {
    initialize: syn::Path,
    serdes: Option<(syn::Path, syn::Path)>,
    source_location: Option<syn::Path>,
    support: syn::Path,
    tree: syn::Path,
}
impl Hooks {
    fn new(plan: &GenerationPlan<'_>) -> Result<Self> {
        let hooks = plan.spec().hooks();
        let serdes = match hooks.serdes_functions() {
            Some(SerDesFunctions { serialize, deserialize }) =>
                Some((parse_path(serialize)?, parse_path(deserialize)?)),
            None => None,
        };
        Ok(Self {
            initialize: parse_path(hooks.initialize_function())?,
            serdes,
            source_location: hooks.source_location().map(parse_path).transpose()?,
            support: parse_path(hooks.support_namespace())?,
            tree: parse_path(hooks.tree_namespace())?,
        })
    }
}

struct RustEmitter<'a, 'spec> {
    hooks: Hooks,
    plan: &'a GenerationPlan<'spec>,
}
impl<'a, 'spec> RustEmitter<'a, 'spec> {
    fn new(plan: &'a GenerationPlan<'spec>) -> Result<Self> {
        for node in plan.nodes() {
            let title = node.node().title_case_name();
            if RESERVED_TYPE_NAMES.contains(&title) {
                return Err(CodegenError::ReservedName {
                    name: node.node().snake_case_name().to_string(),
                });
            }
            for field in node.node().fields() {
                if field.name() == "annotations" {
                    return Err(CodegenError::ReservedName {
                        name: field.name().to_string(),
                    });
                }
            }
        }
        Ok(Self {
            hooks: Hooks::new(plan)?,
            plan,
        })
    }

    fn emit(&self) -> Result<TokenStream> {
        let spec = self.plan.spec();
        let imports = self.imports()?;
        let enums = self.node_enums()?;
        let mut items = vec![];
        for node in self.plan.nodes() {
            items.push(if node.is_leaf() {
                self.leaf_items(node)?
            } else {
                self.abstract_items(node)?
            });
        }
        let tree_node_impl = self.tree_node_impl()?;
        let serializable_impl = self.serializable_node_impl()?;
        let visitors = self.visitors()?;

        let mut body = quote! {
            #imports
            #enums
            #(#items)*
            #tree_node_impl
            #serializable_impl
            #visitors
        };

        // Namespaces after the first become nested modules, innermost last.
        for ns in spec.namespaces().iter().skip(1).rev() {
            let name = ident(&ns.name)?;
            let docs = inner_doc_attrs(ns.doc.as_deref().unwrap_or_default());
            body = quote! {
                pub mod #name {
                    #docs
                    #body
                }
            };
        }

        let mut file_doc = String::new();
        let namespace_doc = spec.namespaces().first().and_then(|ns| ns.doc.as_deref());
        for doc in [spec.header_doc(), namespace_doc, spec.source_doc()]
            .into_iter()
            .flatten()
            .filter(|doc| !doc.is_empty())
        {
            file_doc.push_str(doc);
            file_doc.push_str("\n\n");
        }
        file_doc.push_str("Node types and edges:\n\n```text\n");
        file_doc.push_str(&hierarchy_graph(spec));
        file_doc.push_str("```");
        let file_doc = inner_doc_attrs(&file_doc);

        Ok(quote! {
            #file_doc
            #body
        })
    }

    fn imports(&self) -> Result<TokenStream> {
        let spec = self.plan.spec();
        let support = &self.hooks.support;
        let tree = &self.hooks.tree;
        let mut imports = vec![];
        for include in spec.includes().iter().chain(spec.src_includes()) {
            let path = parse_path(include)?;
            imports.push(quote! { use #path; });
        }

        let mut names = vec![
            "Dumper",
            "EqualityContext",
            "IsA",
            "Kind",
            "Leaf",
            "NodeRef",
            "NotWellFormed",
            "PointerMap",
            "TreeNode",
        ];
        if self.hooks.serdes.is_some() {
            names.extend([
                "IdentifierMap",
                "MapReader",
                "MapWriter",
                "SchemaValidationError",
                "SerializableNode",
                "TreeError",
            ]);
        }
        names.sort_unstable();
        for name in names {
            let name = format_ident!("{name}");
            imports.push(quote! { use #support::#name; });
        }
        imports.push(quote! { use #support::annotations::Annotations; });

        let edges: BTreeSet<&'static str> = self.plan.nodes()
            .iter()
            .flat_map(|node| node.fields())
            .filter_map(|field| match field.role() {
                FieldRole::Owned(edge) | FieldRole::Linked(edge) => Some(edge.name()),
                FieldRole::Primitive(_) => None,
            })
            .collect();
        if !edges.is_empty() {
            imports.push(quote! { use #tree::edges::Edge; });
        }
        for edge in edges {
            let edge = format_ident!("{edge}");
            imports.push(quote! { use #tree::edges::#edge; });
        }
        Ok(quote! { #(#imports)* })
    }

    /// `NodeType` and the `Node` sum over every leaf.
    fn node_enums(&self) -> Result<TokenStream> {
        let leaves = self.plan.leaves();
        let variants = leaves.iter()
            .map(|leaf| type_ident(leaf))
            .collect::<Vec<_>>();
        let variant_docs = leaves.iter().map(|leaf| doc_attrs(leaf.doc()));

        let mut children_arms = vec![];
        let mut any_children = false;
        for plan in self.plan.nodes().iter().filter(|node| node.is_leaf()) {
            let variant = type_ident(plan.node());
            let fields = plan.traversed_fields()
                .map(|field| field_ident(field))
                .collect::<Result<Vec<_>>>()?;
            if fields.is_empty() {
                children_arms.push(quote! { Node::#variant(_) => {}, });
            } else {
                any_children = true;
                children_arms.push(quote! {
                    Node::#variant(node) => {
                        #(children.extend(node.#fields.children());)*
                    },
                });
            }
        }
        let children_body = if any_children {
            quote! {
                let mut children = vec![];
                match self {
                    #(#children_arms)*
                }
                children
            }
        } else {
            quote! { vec![] }
        };

        Ok(quote! {
            /// The instantiable node types.
            #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
            pub enum NodeType {
                #(#variant_docs #variants,)*
            }

            #[derive(Clone, Debug)]
            pub enum Node {
                #(#variants(#variants),)*
            }
            impl Node {
                /// Owned children in field order.
                pub fn children(&self) -> Vec<NodeRef<Node>> {
                    #children_body
                }

                pub fn node_type(&self) -> NodeType {
                    match self {
                        #(Node::#variants(_) => NodeType::#variants,)*
                    }
                }
            }
        })
    }

    fn abstract_items(&self, node: &NodePlan<'spec>) -> Result<TokenStream> {
        let name = type_ident(node.node());
        let title = node.node().title_case_name();
        let docs = doc_attrs(node.node().doc());
        let leaf_tags = node.leaf_tags();
        Ok(quote! {
            #docs
            pub struct #name;
            impl Kind for #name {
                type Node = Node;
                const NAME: &'static str = #title;
                const LEAF_TAGS: &'static [&'static str] = &[#(#leaf_tags),*];
            }
        })
    }

    fn leaf_items(&self, node: &NodePlan<'spec>) -> Result<TokenStream> {
        let name = type_ident(node.node());
        let title = node.node().title_case_name();
        let docs = doc_attrs(node.node().doc());
        let fields = node.fields()
            .iter()
            .map(|field| self.field_tokens(field))
            .collect::<Result<Vec<_>>>()?;

        let field_decls = fields.iter().map(|f| {
            let (docs, ident, ty) = (&f.docs, &f.ident, &f.ty);
            quote! { #docs pub #ident: #ty, }
        });
        let params = fields.iter().map(|f| {
            let (ident, ty) = (&f.ident, &f.ty);
            quote! { #ident: #ty }
        });
        let idents = fields.iter().map(|f| &f.ident).collect::<Vec<_>>();
        let defaults = fields.iter().map(|f| &f.default);

        let find_reachable = self.find_reachable_fn(&fields);
        let check_complete = self.check_complete_fn(node, &fields);
        let deep_clone = fields.iter().map(|f| {
            let ident = &f.ident;
            match f.role {
                FieldRole::Primitive(_) => quote! { #ident: self.#ident.clone(), },
                _ => quote! { #ident: self.#ident.deep_clone(), },
            }
        });
        let equals = self.equals_fn(&fields);
        let dump_fields = self.dump_fields_fn(&fields);
        let serdes = self.serdes_fns(&fields);

        let is_a = node.ancestors()
            .iter()
            .map(|ancestor| type_ident(ancestor));
        let other_leaves = self.other_leaves_arm(quote!(None));

        Ok(quote! {
            #docs
            #[derive(Clone, Debug)]
            pub struct #name {
                #(#field_decls)*
                pub annotations: Annotations,
            }
            impl #name {
                pub fn new(#(#params),*) -> Self {
                    Self {
                        #(#idents,)*
                        annotations: Annotations::new(),
                    }
                }

                #find_reachable
                #check_complete

                fn deep_clone(&self) -> Self {
                    Self {
                        #(#deep_clone)*
                        annotations: self.annotations.clone(),
                    }
                }

                #equals
                #dump_fields
                #serdes
            }
            impl Default for #name {
                fn default() -> Self {
                    Self::new(#(#defaults),*)
                }
            }
            impl Kind for #name {
                type Node = Node;
                const NAME: &'static str = #title;
                const LEAF_TAGS: &'static [&'static str] = &[#title];
            }
            impl Leaf for #name {
                fn cast(node: &Node) -> Option<&Self> {
                    match node {
                        Node::#name(node) => Some(node),
                        #other_leaves
                    }
                }

                fn cast_mut(node: &mut Node) -> Option<&mut Self> {
                    match node {
                        Node::#name(node) => Some(node),
                        #other_leaves
                    }
                }

                fn into_node(self) -> Node {
                    Node::#name(self)
                }
            }
            impl IsA<#name> for #name {}
            #(impl IsA<#is_a> for #name {})*
        })
    }

    fn find_reachable_fn(&self, fields: &[FieldTokens]) -> TokenStream {
        let traversed = fields.iter()
            .filter(|f| matches!(f.role, FieldRole::Owned(_)))
            .map(|f| &f.ident)
            .collect::<Vec<_>>();
        let map = if traversed.is_empty() { quote!(_map) } else { quote!(map) };
        quote! {
            fn find_reachable(&self, #map: &mut PointerMap) -> Result<(), NotWellFormed> {
                #(self.#traversed.find_reachable(map)?;)*
                Ok(())
            }
        }
    }

    fn check_complete_fn(&self, node: &NodePlan<'spec>, fields: &[FieldTokens]) -> TokenStream {
        if node.node().is_error_marker() {
            let message = format!("{} error node in tree", node.node().title_case_name());
            return quote! {
                fn check_complete(&self, _map: &PointerMap) -> Result<(), NotWellFormed> {
                    Err(NotWellFormed::new(#message))
                }
            };
        }
        let mut uses_map = false;
        let checks = fields.iter()
            .filter_map(|f| {
                let (ident, name) = (&f.ident, &f.name);
                match f.role {
                    FieldRole::Primitive(Some(EdgeKind::Many)) => {
                        let message = format!(
                            "{} needs at least one node but has zero",
                            f.name_str,
                        );
                        Some(quote! {
                            if self.#ident.is_empty() {
                                return Err(NotWellFormed::new(#message));
                            }
                        })
                    },
                    FieldRole::Primitive(_) => None,
                    _ => {
                        uses_map = true;
                        Some(quote! { self.#ident.check_complete(#name, map)?; })
                    },
                }
            })
            .collect::<Vec<_>>();
        let map = if uses_map { quote!(map) } else { quote!(_map) };
        quote! {
            fn check_complete(&self, #map: &PointerMap) -> Result<(), NotWellFormed> {
                #(#checks)*
                Ok(())
            }
        }
    }

    fn equals_fn(&self, fields: &[FieldTokens]) -> TokenStream {
        let uses_ctx = fields.iter().any(|f| !matches!(f.role, FieldRole::Primitive(_)));
        let other = if fields.is_empty() { quote!(_other) } else { quote!(other) };
        let ctx = if uses_ctx { quote!(ctx) } else { quote!(_ctx) };
        let terms = fields.iter().map(|f| {
            let ident = &f.ident;
            match f.role {
                FieldRole::Primitive(_) => quote! { self.#ident == other.#ident },
                _ => quote! { self.#ident.equals(&other.#ident, ctx) },
            }
        });
        let body = if fields.is_empty() {
            quote! { true }
        } else {
            quote! { #(#terms)&&* }
        };
        quote! {
            fn equals(&self, #other: &Self, #ctx: &EqualityContext) -> bool {
                #body
            }
        }
    }

    fn dump_fields_fn(&self, fields: &[FieldTokens]) -> TokenStream {
        let dumper = if fields.is_empty() { quote!(_dumper) } else { quote!(dumper) };
        let lines = fields.iter().map(|f| {
            let (ident, name) = (&f.ident, &f.name);
            match f.role {
                FieldRole::Primitive(_) => {
                    let type_name = &f.type_name;
                    quote! { dumper.primitive(#name, #type_name, &self.#ident)?; }
                },
                _ => quote! { self.#ident.dump_field(#name, dumper)?; },
            }
        });
        quote! {
            fn dump_fields(&self, #dumper: &mut Dumper<'_>) -> std::fmt::Result {
                #(#lines)*
                Ok(())
            }
        }
    }

    fn serdes_fns(&self, fields: &[FieldTokens]) -> TokenStream {
        let Some((serialize, deserialize)) = &self.hooks.serdes else {
            return quote! {};
        };
        let uses_ids = fields.iter().any(|f| !matches!(f.role, FieldRole::Primitive(_)));
        let ids = if uses_ids { quote!(ids) } else { quote!(_ids) };
        let map = if fields.is_empty() { quote!(_map) } else { quote!(map) };

        let writes = fields.iter().map(|f| {
            let (ident, name) = (&f.ident, &f.name);
            match f.role {
                FieldRole::Primitive(_) => quote! {
                    {
                        let mut value = MapWriter::new();
                        #serialize(&self.#ident, &mut value)?;
                        map.append(#name, value.into_value());
                    }
                },
                _ => quote! { map.append(#name, self.#ident.serialize_field(ids)?); },
            }
        });
        let reads = fields.iter().map(|f| {
            let (ident, name) = (&f.ident, &f.name);
            match f.role {
                FieldRole::Primitive(_) => quote! {
                    #ident: #deserialize(&map.map(#name)?)?,
                },
                FieldRole::Owned(edge) | FieldRole::Linked(edge) => {
                    let container = format_ident!("{}", edge.name());
                    quote! {
                        #ident: #container::deserialize_field(&map.map(#name)?, ids)?,
                    }
                },
            }
        });

        quote! {
            fn serialize_fields(&self, #map: &mut MapWriter, #ids: &PointerMap) -> Result<(), TreeError> {
                #(#writes)*
                Ok(())
            }

            fn deserialize(#map: &MapReader<'_>, #ids: &mut IdentifierMap<Node>) -> Result<Self, TreeError> {
                Ok(Self {
                    #(#reads)*
                    annotations: Annotations::new(),
                })
            }
        }
    }

    fn tree_node_impl(&self) -> Result<TokenStream> {
        let variants = self.leaf_idents();
        let tags = self.plan.leaves().iter().map(|leaf| leaf.title_case_name());
        let source_location = match &self.hooks.source_location {
            Some(location) => quote! {
                fn source_location(&self) -> Option<String> {
                    self.annotations().get::<#location>().map(ToString::to_string)
                }
            },
            None => quote! {},
        };

        let mixed_leaves = self.other_leaves_arm(quote!(false));

        Ok(quote! {
            impl TreeNode for Node {
                fn type_tag(&self) -> &'static str {
                    match self {
                        #(Node::#variants(_) => #tags,)*
                    }
                }

                fn annotations(&self) -> &Annotations {
                    match self {
                        #(Node::#variants(node) => &node.annotations,)*
                    }
                }

                fn annotations_mut(&mut self) -> &mut Annotations {
                    match self {
                        #(Node::#variants(node) => &mut node.annotations,)*
                    }
                }

                fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
                    match self {
                        #(Node::#variants(node) => node.find_reachable(map),)*
                    }
                }

                fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
                    match self {
                        #(Node::#variants(node) => node.check_complete(map),)*
                    }
                }

                fn deep_clone(&self) -> Self {
                    match self {
                        #(Node::#variants(node) => Node::#variants(node.deep_clone()),)*
                    }
                }

                fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
                    match (self, other) {
                        #((Node::#variants(lhs), Node::#variants(rhs)) => lhs.equals(rhs, ctx),)*
                        #mixed_leaves
                    }
                }

                fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
                    match self {
                        #(Node::#variants(node) => node.dump_fields(dumper),)*
                    }
                }

                #source_location
            }
        })
    }

    fn serializable_node_impl(&self) -> Result<TokenStream> {
        if self.hooks.serdes.is_none() {
            return Ok(quote! {});
        }
        let variants = self.leaf_idents();
        let tags = self.plan.leaves().iter().map(|leaf| leaf.title_case_name());
        Ok(quote! {
            impl SerializableNode for Node {
                fn serialize_fields(&self, map: &mut MapWriter, ids: &PointerMap) -> Result<(), TreeError> {
                    match self {
                        #(Node::#variants(node) => node.serialize_fields(map, ids),)*
                    }
                }

                fn deserialize_leaf(
                    tag: &str,
                    map: &MapReader<'_>,
                    ids: &mut IdentifierMap<Self>,
                ) -> Result<Self, TreeError> {
                    match tag {
                        #(#tags => Ok(Node::#variants(#variants::deserialize(map, ids)?)),)*
                        found => Err(SchemaValidationError::UnexpectedNodeType {
                            expected: "Node",
                            found: found.to_string(),
                        }.into()),
                    }
                }
            }
        })
    }

    fn visitors(&self) -> Result<TokenStream> {
        let mut visit_methods = vec![];
        let mut recursive_methods = vec![];
        for node in self.plan.nodes() {
            let method = visit_ident(node.node());
            let fallback = match node.visit_fallback() {
                VisitFallback::Node => format_ident!("visit_node"),
                VisitFallback::Parent(parent) => visit_ident(parent),
            };
            visit_methods.push(quote! {
                fn #method(&mut self, node: &NodeRef<Node>) -> T {
                    self.#fallback(node)
                }
            });
            let walk = if node.is_leaf() {
                quote! { walk_children(node, self); }
            } else {
                quote! {}
            };
            recursive_methods.push(quote! {
                fn #method(&mut self, node: &NodeRef<Node>) {
                    self.#fallback(node);
                    #walk
                }
            });
        }

        let variants = self.leaf_idents();
        let leaf_methods = self.plan.leaves()
            .iter()
            .map(|leaf| visit_ident(leaf))
            .collect::<Vec<_>>();

        Ok(quote! {
            /// Visits a node through the method of its type. Each method
            /// defaults to the method of the parent type, and finally to
            /// `visit_node`.
            pub trait Visitor<T> {
                fn visit_node(&mut self, node: &NodeRef<Node>) -> T;

                #(#visit_methods)*
            }

            pub fn visit<T, V: Visitor<T> + ?Sized>(node: &NodeRef<Node>, visitor: &mut V) -> T {
                let node_type = node.borrow().node_type();
                match node_type {
                    #(NodeType::#variants => visitor.#leaf_methods(node),)*
                }
            }

            /// Pre-order traversal over owning edges. Links are never
            /// followed.
            pub trait RecursiveVisitor {
                fn visit_node(&mut self, _node: &NodeRef<Node>) {}

                #(#recursive_methods)*
            }

            pub fn walk<V: RecursiveVisitor + ?Sized>(node: &NodeRef<Node>, visitor: &mut V) {
                let node_type = node.borrow().node_type();
                match node_type {
                    #(NodeType::#variants => visitor.#leaf_methods(node),)*
                }
            }

            pub fn walk_children<V: RecursiveVisitor + ?Sized>(node: &NodeRef<Node>, visitor: &mut V) {
                let children = node.borrow().children();
                for child in &children {
                    walk(child, visitor);
                }
            }
        })
    }

    fn field_tokens(&self, field: &FieldPlan<'spec>) -> Result<FieldTokens> {
        let ident = field_ident(field)?;
        let name = Literal::string(field.name());
        let docs = doc_attrs(field.field().doc());
        let (ty, default, type_name) = match field.field().kind() {
            FieldKind::Primitive { type_path, edge } => {
                let element: syn::Type = syn::parse_str(type_path).map_err(|err| {
                    CodegenError::InvalidType {
                        field: field.name().to_string(),
                        type_path: type_path.to_string(),
                        message: err.to_string(),
                    }
                })?;
                let ty = match edge {
                    Some(EdgeKind::Maybe) => quote! { Option<#element> },
                    Some(EdgeKind::Any | EdgeKind::Many) => quote! { Vec<#element> },
                    _ => quote! { #element },
                };
                let initialize = &self.hooks.initialize;
                (ty, quote! { #initialize() }, type_path.to_string())
            },
            FieldKind::Node { edge, target } => {
                let container = format_ident!("{}", edge.name());
                let target = type_ident(self.plan.spec().node(*target));
                (
                    quote! { #container<#target> },
                    quote! { #container::new() },
                    edge.name().to_string(),
                )
            },
        };
        Ok(FieldTokens {
            default,
            docs,
            ident,
            name,
            name_str: field.name().to_string(),
            role: field.role(),
            ty,
            type_name,
        })
    }

    /// A catch-all match arm over `Node`, left out when the tree has a
    /// single leaf type and the arm could never match.
    fn other_leaves_arm(&self, value: TokenStream) -> TokenStream {
        if self.plan.leaves().len() > 1 {
            quote! { _ => #value, }
        } else {
            quote! {}
        }
    }

    fn leaf_idents(&self) -> Vec<Ident> {
        self.plan.leaves().iter().map(|leaf| type_ident(leaf)).collect()
    }
}

struct FieldTokens {
    default: TokenStream,
    docs: TokenStream,
    ident: Ident,
    name: Literal,
    name_str: String,
    role: FieldRole,
    ty: TokenStream,
    type_name: String,
}

fn doc_attrs(doc: &str) -> TokenStream {
    let lines = doc.lines().map(|line| format!(" {line}"));
    quote! { #(#[doc = #lines])* }
}

fn inner_doc_attrs(doc: &str) -> TokenStream {
    let lines = doc.lines().map(|line| format!(" {line}"));
    quote! { #(#![doc = #lines])* }
}

/// An identifier for `name`, raw when `name` is a keyword.
fn ident(name: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{name}")))
        .map_err(|err| CodegenError::InvalidIdentifier {
            name: name.to_string(),
            message: err.to_string(),
        })
}

fn field_ident(field: &FieldPlan<'_>) -> Result<Ident> {
    ident(field.name())
}

fn parse_path(path: &str) -> Result<syn::Path> {
    syn::parse_str(path).map_err(|err| CodegenError::InvalidPath {
        path: path.to_string(),
        message: err.to_string(),
    })
}

fn type_ident(node: &NodeType) -> Ident {
    Ident::new(node.title_case_name(), Span::call_site())
}

fn visit_ident(node: &NodeType) -> Ident {
    format_ident!("visit_{}", node.snake_case_name())
}
