use crate::IdentifierMap;
use crate::Kind;
use crate::MapReader;
use crate::MapWriter;
use crate::NodeRef;
use crate::NotWellFormed;
use crate::PointerMap;
use crate::SchemaValidationError;
use crate::SerializableNode;
use crate::TreeError;
use crate::TreeNode;
use crate::cbor;

type Result<T> = std::result::Result<T, TreeError>;

/// Encodes the tree rooted at `root` as CBOR.
///
/// The tree must be well-formed. Nodes are numbered in the order they are
/// reached from the root; links are written as the number of their target.
pub fn serialize<N: SerializableNode>(root: &NodeRef<N>) -> Result<Vec<u8>> {
    let ids = root.well_formed_ids()?;
    let mut map = MapWriter::new();
    write_node_into(root, &ids, &mut map)?;
    cbor::encode(&map.into_value())
}

/// Decodes a tree whose root is of kind `K`.
///
/// Fails without returning a partial tree if the data does not match the
/// schema, if a link refers to a node that does not exist, or if the
/// decoded tree is not well-formed.
pub fn deserialize<K: Kind>(bytes: &[u8]) -> Result<NodeRef<K::Node>>
where
    K::Node: SerializableNode,
{
    let value = cbor::decode(bytes)?;
    let map = MapReader::new(&value, "root")?;
    let mut ids = IdentifierMap::new();
    let root = read_node::<K>(&map, &mut ids)?;
    ids.restore_links()?;
    root.check_well_formed()?;
    Ok(root)
}

/// Reads a node map, dispatching on its `@t` tag across the leaves of `K`.
pub fn read_node<K: Kind>(
    map: &MapReader<'_>,
    ids: &mut IdentifierMap<K::Node>,
) -> Result<NodeRef<K::Node>>
where
    K::Node: SerializableNode,
{
    let tag = map.text("@t")?;
    if !K::LEAF_TAGS.contains(&tag) {
        return Err(SchemaValidationError::UnexpectedNodeType {
            expected: K::NAME,
            found: tag.to_string(),
        }.into());
    }
    let seq = map.uint("@i")?;
    let mut node = K::Node::deserialize_leaf(tag, map, ids)?;
    node.annotations_mut().read_from(map)?;
    let node = NodeRef::new(node);
    ids.register(seq, &node)?;
    Ok(node)
}

/// Appends the `@t`, `@i`, field and annotation entries of `node` to `map`.
pub(crate) fn write_node_into<N: SerializableNode>(
    node: &NodeRef<N>,
    ids: &PointerMap,
    map: &mut MapWriter,
) -> Result<()> {
    let Some(seq) = ids.get(node) else {
        return Err(NotWellFormed::new(format!(
            "{} node is not reachable from the serialized root",
            node.type_tag(),
        )).into());
    };
    let inner = node.borrow();
    map.append_text("@t", inner.type_tag());
    map.append_uint("@i", seq as u64);
    inner.serialize_fields(map, ids)?;
    inner.annotations().write_into(map);
    Ok(())
}
