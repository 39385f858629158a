//! A toy file system tree.
//!
//! Generated from the directory specification; every item below has the
//! shape the Rust backend emits.

use super::primitives::Letter;
use super::primitives::Location;
use treegen_runtime::Dumper;
use treegen_runtime::EqualityContext;
use treegen_runtime::IdentifierMap;
use treegen_runtime::IsA;
use treegen_runtime::Kind;
use treegen_runtime::Leaf;
use treegen_runtime::MapReader;
use treegen_runtime::MapWriter;
use treegen_runtime::NodeRef;
use treegen_runtime::NotWellFormed;
use treegen_runtime::PointerMap;
use treegen_runtime::SchemaValidationError;
use treegen_runtime::SerializableNode;
use treegen_runtime::TreeError;
use treegen_runtime::TreeNode;
use treegen_runtime::annotations::Annotations;
use treegen_runtime::edges::Any;
use treegen_runtime::edges::Edge;
use treegen_runtime::edges::Link;
use treegen_runtime::edges::Many;
use treegen_runtime::edges::One;

/// The instantiable node types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeType {
    System,
    Drive,
    File,
    Directory,
    Mount,
    ErrorEntry,
}

#[derive(Clone, Debug)]
pub enum Node {
    System(System),
    Drive(Drive),
    File(File),
    Directory(Directory),
    Mount(Mount),
    ErrorEntry(ErrorEntry),
}
impl Node {
    /// Owned children in field order.
    pub fn children(&self) -> Vec<NodeRef<Node>> {
        let mut children = vec![];
        match self {
            Node::System(node) => {
                children.extend(node.drives.children());
            },
            Node::Drive(node) => {
                children.extend(node.root_dir.children());
            },
            Node::File(_) => {},
            Node::Directory(node) => {
                children.extend(node.entries.children());
            },
            Node::Mount(_) => {},
            Node::ErrorEntry(_) => {},
        }
        children
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::System(_) => NodeType::System,
            Node::Drive(_) => NodeType::Drive,
            Node::File(_) => NodeType::File,
            Node::Directory(_) => NodeType::Directory,
            Node::Mount(_) => NodeType::Mount,
            Node::ErrorEntry(_) => NodeType::ErrorEntry,
        }
    }
}

/// A computer system.
#[derive(Clone, Debug)]
pub struct System {
    /// The drives.
    pub drives: Many<Drive>,
    pub annotations: Annotations,
}
impl System {
    pub fn new(drives: Many<Drive>) -> Self {
        Self {
            drives,
            annotations: Annotations::new(),
        }
    }

    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.drives.find_reachable(map)?;
        Ok(())
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.drives.check_complete("drives", map)?;
        Ok(())
    }

    fn deep_clone(&self) -> Self {
        Self {
            drives: self.drives.deep_clone(),
            annotations: self.annotations.clone(),
        }
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        self.drives.equals(&other.drives, ctx)
    }

    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        self.drives.dump_field("drives", dumper)?;
        Ok(())
    }

    fn serialize_fields(&self, map: &mut MapWriter, ids: &PointerMap) -> Result<(), TreeError> {
        map.append("drives", self.drives.serialize_field(ids)?);
        Ok(())
    }

    fn deserialize(map: &MapReader<'_>, ids: &mut IdentifierMap<Node>) -> Result<Self, TreeError> {
        Ok(Self {
            drives: Many::deserialize_field(&map.map("drives")?, ids)?,
            annotations: Annotations::new(),
        })
    }
}
impl Default for System {
    fn default() -> Self {
        Self::new(Many::new())
    }
}
impl Kind for System {
    type Node = Node;
    const NAME: &'static str = "System";
    const LEAF_TAGS: &'static [&'static str] = &["System"];
}
impl Leaf for System {
    fn cast(node: &Node) -> Option<&Self> {
        match node {
            Node::System(node) => Some(node),
            _ => None,
        }
    }

    fn cast_mut(node: &mut Node) -> Option<&mut Self> {
        match node {
            Node::System(node) => Some(node),
            _ => None,
        }
    }

    fn into_node(self) -> Node {
        Node::System(self)
    }
}
impl IsA<System> for System {}

/// A drive.
#[derive(Clone, Debug)]
pub struct Drive {
    /// The drive letter.
    pub letter: Letter,
    /// Root directory.
    pub root_dir: One<Directory>,
    pub annotations: Annotations,
}
impl Drive {
    pub fn new(letter: Letter, root_dir: One<Directory>) -> Self {
        Self {
            letter,
            root_dir,
            annotations: Annotations::new(),
        }
    }

    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.root_dir.find_reachable(map)?;
        Ok(())
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.root_dir.check_complete("root_dir", map)?;
        Ok(())
    }

    fn deep_clone(&self) -> Self {
        Self {
            letter: self.letter.clone(),
            root_dir: self.root_dir.deep_clone(),
            annotations: self.annotations.clone(),
        }
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        self.letter == other.letter
            && self.root_dir.equals(&other.root_dir, ctx)
    }

    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        dumper.primitive("letter", "Letter", &self.letter)?;
        self.root_dir.dump_field("root_dir", dumper)?;
        Ok(())
    }

    fn serialize_fields(&self, map: &mut MapWriter, ids: &PointerMap) -> Result<(), TreeError> {
        {
            let mut value = MapWriter::new();
            treegen_runtime::primitives::serialize(&self.letter, &mut value)?;
            map.append("letter", value.into_value());
        }
        map.append("root_dir", self.root_dir.serialize_field(ids)?);
        Ok(())
    }

    fn deserialize(map: &MapReader<'_>, ids: &mut IdentifierMap<Node>) -> Result<Self, TreeError> {
        Ok(Self {
            letter: treegen_runtime::primitives::deserialize(&map.map("letter")?)?,
            root_dir: One::deserialize_field(&map.map("root_dir")?, ids)?,
            annotations: Annotations::new(),
        })
    }
}
impl Default for Drive {
    fn default() -> Self {
        Self::new(treegen_runtime::primitives::initialize(), One::new())
    }
}
impl Kind for Drive {
    type Node = Node;
    const NAME: &'static str = "Drive";
    const LEAF_TAGS: &'static [&'static str] = &["Drive"];
}
impl Leaf for Drive {
    fn cast(node: &Node) -> Option<&Self> {
        match node {
            Node::Drive(node) => Some(node),
            _ => None,
        }
    }

    fn cast_mut(node: &mut Node) -> Option<&mut Self> {
        match node {
            Node::Drive(node) => Some(node),
            _ => None,
        }
    }

    fn into_node(self) -> Node {
        Node::Drive(self)
    }
}
impl IsA<Drive> for Drive {}

/// A directory entry.
pub struct Entry;
impl Kind for Entry {
    type Node = Node;
    const NAME: &'static str = "Entry";
    const LEAF_TAGS: &'static [&'static str] = &["File", "Directory", "Mount", "ErrorEntry"];
}

/// A file.
#[derive(Clone, Debug)]
pub struct File {
    /// Name of the entry.
    pub name: String,
    /// The file contents.
    pub contents: String,
    pub annotations: Annotations,
}
impl File {
    pub fn new(name: String, contents: String) -> Self {
        Self {
            name,
            contents,
            annotations: Annotations::new(),
        }
    }

    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, _map: &PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            contents: self.contents.clone(),
            annotations: self.annotations.clone(),
        }
    }

    fn equals(&self, other: &Self, _ctx: &EqualityContext) -> bool {
        self.name == other.name
            && self.contents == other.contents
    }

    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        dumper.primitive("name", "String", &self.name)?;
        dumper.primitive("contents", "String", &self.contents)?;
        Ok(())
    }

    fn serialize_fields(&self, map: &mut MapWriter, _ids: &PointerMap) -> Result<(), TreeError> {
        {
            let mut value = MapWriter::new();
            treegen_runtime::primitives::serialize(&self.name, &mut value)?;
            map.append("name", value.into_value());
        }
        {
            let mut value = MapWriter::new();
            treegen_runtime::primitives::serialize(&self.contents, &mut value)?;
            map.append("contents", value.into_value());
        }
        Ok(())
    }

    fn deserialize(map: &MapReader<'_>, _ids: &mut IdentifierMap<Node>) -> Result<Self, TreeError> {
        Ok(Self {
            name: treegen_runtime::primitives::deserialize(&map.map("name")?)?,
            contents: treegen_runtime::primitives::deserialize(&map.map("contents")?)?,
            annotations: Annotations::new(),
        })
    }
}
impl Default for File {
    fn default() -> Self {
        Self::new(
            treegen_runtime::primitives::initialize(),
            treegen_runtime::primitives::initialize(),
        )
    }
}
impl Kind for File {
    type Node = Node;
    const NAME: &'static str = "File";
    const LEAF_TAGS: &'static [&'static str] = &["File"];
}
impl Leaf for File {
    fn cast(node: &Node) -> Option<&Self> {
        match node {
            Node::File(node) => Some(node),
            _ => None,
        }
    }

    fn cast_mut(node: &mut Node) -> Option<&mut Self> {
        match node {
            Node::File(node) => Some(node),
            _ => None,
        }
    }

    fn into_node(self) -> Node {
        Node::File(self)
    }
}
impl IsA<File> for File {}
impl IsA<Entry> for File {}

/// A directory.
#[derive(Clone, Debug)]
pub struct Directory {
    /// Name of the entry.
    pub name: String,
    /// The entries.
    pub entries: Any<Entry>,
    pub annotations: Annotations,
}
impl Directory {
    pub fn new(name: String, entries: Any<Entry>) -> Self {
        Self {
            name,
            entries,
            annotations: Annotations::new(),
        }
    }

    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.entries.find_reachable(map)?;
        Ok(())
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.entries.check_complete("entries", map)?;
        Ok(())
    }

    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            entries: self.entries.deep_clone(),
            annotations: self.annotations.clone(),
        }
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        self.name == other.name
            && self.entries.equals(&other.entries, ctx)
    }

    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        dumper.primitive("name", "String", &self.name)?;
        self.entries.dump_field("entries", dumper)?;
        Ok(())
    }

    fn serialize_fields(&self, map: &mut MapWriter, ids: &PointerMap) -> Result<(), TreeError> {
        {
            let mut value = MapWriter::new();
            treegen_runtime::primitives::serialize(&self.name, &mut value)?;
            map.append("name", value.into_value());
        }
        map.append("entries", self.entries.serialize_field(ids)?);
        Ok(())
    }

    fn deserialize(map: &MapReader<'_>, ids: &mut IdentifierMap<Node>) -> Result<Self, TreeError> {
        Ok(Self {
            name: treegen_runtime::primitives::deserialize(&map.map("name")?)?,
            entries: Any::deserialize_field(&map.map("entries")?, ids)?,
            annotations: Annotations::new(),
        })
    }
}
impl Default for Directory {
    fn default() -> Self {
        Self::new(treegen_runtime::primitives::initialize(), Any::new())
    }
}
impl Kind for Directory {
    type Node = Node;
    const NAME: &'static str = "Directory";
    const LEAF_TAGS: &'static [&'static str] = &["Directory"];
}
impl Leaf for Directory {
    fn cast(node: &Node) -> Option<&Self> {
        match node {
            Node::Directory(node) => Some(node),
            _ => None,
        }
    }

    fn cast_mut(node: &mut Node) -> Option<&mut Self> {
        match node {
            Node::Directory(node) => Some(node),
            _ => None,
        }
    }

    fn into_node(self) -> Node {
        Node::Directory(self)
    }
}
impl IsA<Directory> for Directory {}
impl IsA<Entry> for Directory {}

/// A mount point.
#[derive(Clone, Debug)]
pub struct Mount {
    /// Name of the entry.
    pub name: String,
    /// Mounted directory.
    pub target: Link<Directory>,
    pub annotations: Annotations,
}
impl Mount {
    pub fn new(name: String, target: Link<Directory>) -> Self {
        Self {
            name,
            target,
            annotations: Annotations::new(),
        }
    }

    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.target.check_complete("target", map)?;
        Ok(())
    }

    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            target: self.target.deep_clone(),
            annotations: self.annotations.clone(),
        }
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        self.name == other.name
            && self.target.equals(&other.target, ctx)
    }

    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        dumper.primitive("name", "String", &self.name)?;
        self.target.dump_field("target", dumper)?;
        Ok(())
    }

    fn serialize_fields(&self, map: &mut MapWriter, ids: &PointerMap) -> Result<(), TreeError> {
        {
            let mut value = MapWriter::new();
            treegen_runtime::primitives::serialize(&self.name, &mut value)?;
            map.append("name", value.into_value());
        }
        map.append("target", self.target.serialize_field(ids)?);
        Ok(())
    }

    fn deserialize(map: &MapReader<'_>, ids: &mut IdentifierMap<Node>) -> Result<Self, TreeError> {
        Ok(Self {
            name: treegen_runtime::primitives::deserialize(&map.map("name")?)?,
            target: Link::deserialize_field(&map.map("target")?, ids)?,
            annotations: Annotations::new(),
        })
    }
}
impl Default for Mount {
    fn default() -> Self {
        Self::new(treegen_runtime::primitives::initialize(), Link::new())
    }
}
impl Kind for Mount {
    type Node = Node;
    const NAME: &'static str = "Mount";
    const LEAF_TAGS: &'static [&'static str] = &["Mount"];
}
impl Leaf for Mount {
    fn cast(node: &Node) -> Option<&Self> {
        match node {
            Node::Mount(node) => Some(node),
            _ => None,
        }
    }

    fn cast_mut(node: &mut Node) -> Option<&mut Self> {
        match node {
            Node::Mount(node) => Some(node),
            _ => None,
        }
    }

    fn into_node(self) -> Node {
        Node::Mount(self)
    }
}
impl IsA<Mount> for Mount {}
impl IsA<Entry> for Mount {}

/// A recovered parse error.
#[derive(Clone, Debug)]
pub struct ErrorEntry {
    /// Name of the entry.
    pub name: String,
    pub annotations: Annotations,
}
impl ErrorEntry {
    pub fn new(name: String) -> Self {
        Self {
            name,
            annotations: Annotations::new(),
        }
    }

    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, _map: &PointerMap) -> Result<(), NotWellFormed> {
        Err(NotWellFormed::new("ErrorEntry error node in tree"))
    }

    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            annotations: self.annotations.clone(),
        }
    }

    fn equals(&self, other: &Self, _ctx: &EqualityContext) -> bool {
        self.name == other.name
    }

    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        dumper.primitive("name", "String", &self.name)?;
        Ok(())
    }

    fn serialize_fields(&self, map: &mut MapWriter, _ids: &PointerMap) -> Result<(), TreeError> {
        {
            let mut value = MapWriter::new();
            treegen_runtime::primitives::serialize(&self.name, &mut value)?;
            map.append("name", value.into_value());
        }
        Ok(())
    }

    fn deserialize(map: &MapReader<'_>, _ids: &mut IdentifierMap<Node>) -> Result<Self, TreeError> {
        Ok(Self {
            name: treegen_runtime::primitives::deserialize(&map.map("name")?)?,
            annotations: Annotations::new(),
        })
    }
}
impl Default for ErrorEntry {
    fn default() -> Self {
        Self::new(treegen_runtime::primitives::initialize())
    }
}
impl Kind for ErrorEntry {
    type Node = Node;
    const NAME: &'static str = "ErrorEntry";
    const LEAF_TAGS: &'static [&'static str] = &["ErrorEntry"];
}
impl Leaf for ErrorEntry {
    fn cast(node: &Node) -> Option<&Self> {
        match node {
            Node::ErrorEntry(node) => Some(node),
            _ => None,
        }
    }

    fn cast_mut(node: &mut Node) -> Option<&mut Self> {
        match node {
            Node::ErrorEntry(node) => Some(node),
            _ => None,
        }
    }

    fn into_node(self) -> Node {
        Node::ErrorEntry(self)
    }
}
impl IsA<ErrorEntry> for ErrorEntry {}
impl IsA<Entry> for ErrorEntry {}

impl TreeNode for Node {
    fn type_tag(&self) -> &'static str {
        match self {
            Node::System(_) => "System",
            Node::Drive(_) => "Drive",
            Node::File(_) => "File",
            Node::Directory(_) => "Directory",
            Node::Mount(_) => "Mount",
            Node::ErrorEntry(_) => "ErrorEntry",
        }
    }

    fn annotations(&self) -> &Annotations {
        match self {
            Node::System(node) => &node.annotations,
            Node::Drive(node) => &node.annotations,
            Node::File(node) => &node.annotations,
            Node::Directory(node) => &node.annotations,
            Node::Mount(node) => &node.annotations,
            Node::ErrorEntry(node) => &node.annotations,
        }
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        match self {
            Node::System(node) => &mut node.annotations,
            Node::Drive(node) => &mut node.annotations,
            Node::File(node) => &mut node.annotations,
            Node::Directory(node) => &mut node.annotations,
            Node::Mount(node) => &mut node.annotations,
            Node::ErrorEntry(node) => &mut node.annotations,
        }
    }

    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        match self {
            Node::System(node) => node.find_reachable(map),
            Node::Drive(node) => node.find_reachable(map),
            Node::File(node) => node.find_reachable(map),
            Node::Directory(node) => node.find_reachable(map),
            Node::Mount(node) => node.find_reachable(map),
            Node::ErrorEntry(node) => node.find_reachable(map),
        }
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        match self {
            Node::System(node) => node.check_complete(map),
            Node::Drive(node) => node.check_complete(map),
            Node::File(node) => node.check_complete(map),
            Node::Directory(node) => node.check_complete(map),
            Node::Mount(node) => node.check_complete(map),
            Node::ErrorEntry(node) => node.check_complete(map),
        }
    }

    fn deep_clone(&self) -> Self {
        match self {
            Node::System(node) => Node::System(node.deep_clone()),
            Node::Drive(node) => Node::Drive(node.deep_clone()),
            Node::File(node) => Node::File(node.deep_clone()),
            Node::Directory(node) => Node::Directory(node.deep_clone()),
            Node::Mount(node) => Node::Mount(node.deep_clone()),
            Node::ErrorEntry(node) => Node::ErrorEntry(node.deep_clone()),
        }
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        match (self, other) {
            (Node::System(lhs), Node::System(rhs)) => lhs.equals(rhs, ctx),
            (Node::Drive(lhs), Node::Drive(rhs)) => lhs.equals(rhs, ctx),
            (Node::File(lhs), Node::File(rhs)) => lhs.equals(rhs, ctx),
            (Node::Directory(lhs), Node::Directory(rhs)) => lhs.equals(rhs, ctx),
            (Node::Mount(lhs), Node::Mount(rhs)) => lhs.equals(rhs, ctx),
            (Node::ErrorEntry(lhs), Node::ErrorEntry(rhs)) => lhs.equals(rhs, ctx),
            _ => false,
        }
    }

    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        match self {
            Node::System(node) => node.dump_fields(dumper),
            Node::Drive(node) => node.dump_fields(dumper),
            Node::File(node) => node.dump_fields(dumper),
            Node::Directory(node) => node.dump_fields(dumper),
            Node::Mount(node) => node.dump_fields(dumper),
            Node::ErrorEntry(node) => node.dump_fields(dumper),
        }
    }

    fn source_location(&self) -> Option<String> {
        self.annotations().get::<Location>().map(ToString::to_string)
    }
}

impl SerializableNode for Node {
    fn serialize_fields(&self, map: &mut MapWriter, ids: &PointerMap) -> Result<(), TreeError> {
        match self {
            Node::System(node) => node.serialize_fields(map, ids),
            Node::Drive(node) => node.serialize_fields(map, ids),
            Node::File(node) => node.serialize_fields(map, ids),
            Node::Directory(node) => node.serialize_fields(map, ids),
            Node::Mount(node) => node.serialize_fields(map, ids),
            Node::ErrorEntry(node) => node.serialize_fields(map, ids),
        }
    }

    fn deserialize_leaf(
        tag: &str,
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<Self>,
    ) -> Result<Self, TreeError> {
        match tag {
            "System" => Ok(Node::System(System::deserialize(map, ids)?)),
            "Drive" => Ok(Node::Drive(Drive::deserialize(map, ids)?)),
            "File" => Ok(Node::File(File::deserialize(map, ids)?)),
            "Directory" => Ok(Node::Directory(Directory::deserialize(map, ids)?)),
            "Mount" => Ok(Node::Mount(Mount::deserialize(map, ids)?)),
            "ErrorEntry" => Ok(Node::ErrorEntry(ErrorEntry::deserialize(map, ids)?)),
            found => Err(SchemaValidationError::UnexpectedNodeType {
                expected: "Node",
                found: found.to_string(),
            }.into()),
        }
    }
}

/// Visits a node through the method of its type. Each method defaults to
/// the method of the parent type, and finally to `visit_node`.
pub trait Visitor<T> {
    fn visit_node(&mut self, node: &NodeRef<Node>) -> T;

    fn visit_system(&mut self, node: &NodeRef<Node>) -> T {
        self.visit_node(node)
    }

    fn visit_drive(&mut self, node: &NodeRef<Node>) -> T {
        self.visit_node(node)
    }

    fn visit_entry(&mut self, node: &NodeRef<Node>) -> T {
        self.visit_node(node)
    }

    fn visit_file(&mut self, node: &NodeRef<Node>) -> T {
        self.visit_entry(node)
    }

    fn visit_directory(&mut self, node: &NodeRef<Node>) -> T {
        self.visit_entry(node)
    }

    fn visit_mount(&mut self, node: &NodeRef<Node>) -> T {
        self.visit_entry(node)
    }

    fn visit_error_entry(&mut self, node: &NodeRef<Node>) -> T {
        self.visit_entry(node)
    }
}

pub fn visit<T, V: Visitor<T> + ?Sized>(node: &NodeRef<Node>, visitor: &mut V) -> T {
    let node_type = node.borrow().node_type();
    match node_type {
        NodeType::System => visitor.visit_system(node),
        NodeType::Drive => visitor.visit_drive(node),
        NodeType::File => visitor.visit_file(node),
        NodeType::Directory => visitor.visit_directory(node),
        NodeType::Mount => visitor.visit_mount(node),
        NodeType::ErrorEntry => visitor.visit_error_entry(node),
    }
}

/// Pre-order traversal over owning edges. Links are never followed.
pub trait RecursiveVisitor {
    fn visit_node(&mut self, _node: &NodeRef<Node>) {}

    fn visit_system(&mut self, node: &NodeRef<Node>) {
        self.visit_node(node);
        walk_children(node, self);
    }

    fn visit_drive(&mut self, node: &NodeRef<Node>) {
        self.visit_node(node);
        walk_children(node, self);
    }

    fn visit_entry(&mut self, node: &NodeRef<Node>) {
        self.visit_node(node);
    }

    fn visit_file(&mut self, node: &NodeRef<Node>) {
        self.visit_entry(node);
        walk_children(node, self);
    }

    fn visit_directory(&mut self, node: &NodeRef<Node>) {
        self.visit_entry(node);
        walk_children(node, self);
    }

    fn visit_mount(&mut self, node: &NodeRef<Node>) {
        self.visit_entry(node);
        walk_children(node, self);
    }

    fn visit_error_entry(&mut self, node: &NodeRef<Node>) {
        self.visit_entry(node);
        walk_children(node, self);
    }
}

pub fn walk<V: RecursiveVisitor + ?Sized>(node: &NodeRef<Node>, visitor: &mut V) {
    let node_type = node.borrow().node_type();
    match node_type {
        NodeType::System => visitor.visit_system(node),
        NodeType::Drive => visitor.visit_drive(node),
        NodeType::File => visitor.visit_file(node),
        NodeType::Directory => visitor.visit_directory(node),
        NodeType::Mount => visitor.visit_mount(node),
        NodeType::ErrorEntry => visitor.visit_error_entry(node),
    }
}

pub fn walk_children<V: RecursiveVisitor + ?Sized>(node: &NodeRef<Node>, visitor: &mut V) {
    let children = node.borrow().children();
    for child in &children {
        walk(child, visitor);
    }
}
