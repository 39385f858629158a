#![allow(dead_code)]

pub mod directory;
pub mod primitives;

use directory::Directory;
use directory::Drive;
use directory::File;
use directory::Mount;
use directory::Node;
use directory::System;
use primitives::Letter;
use treegen_runtime::NodeRef;
use treegen_runtime::TreeError;
use treegen_runtime::edges::Any;
use treegen_runtime::edges::Link;
use treegen_runtime::edges::Many;
use treegen_runtime::edges::One;
use treegen_runtime::make;

/// A system with one drive `C:` whose root holds a file, a subdirectory
/// and a mount of that subdirectory.
pub fn sample_system() -> Result<NodeRef<Node>, TreeError> {
    let sub = make(Directory::new("sub".to_string(), Any::new()));
    let mut entries = Any::new();
    entries.emplace(File::new("a.txt".to_string(), "hello".to_string()));
    entries.add(sub.clone())?;
    entries.emplace(Mount::new("m".to_string(), Link::to(&sub)?));
    let root = make(Directory::new("".to_string(), entries));

    let mut drives = Many::new();
    drives.emplace(Drive::new(Letter('C'), One::from_node(root)?));
    Ok(make(System::new(drives)))
}

/// The `sub` directory and the mount of [`sample_system`].
pub fn sample_sub_and_mount(system: &NodeRef<Node>) -> Option<(NodeRef<Node>, NodeRef<Node>)> {
    let root = system.borrow().children().first()?.borrow().children().first()?.clone();
    let entries = root.borrow().children();
    Some((entries.get(1)?.clone(), entries.get(2)?.clone()))
}

/// Target of the mount of [`sample_system`].
pub fn mount_target(mount: &NodeRef<Node>) -> Option<NodeRef<Node>> {
    mount.borrow_as::<Mount>()?.target.get()
}
