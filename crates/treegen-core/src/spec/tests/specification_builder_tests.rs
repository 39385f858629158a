use crate::EdgeKind;
use crate::spec::FieldKind;
use crate::spec::NodeBuilder;
use crate::spec::NodeTypeId;
use crate::spec::SpecBuildError;
use crate::spec::SpecBuildErrorCategory;
use crate::spec::SpecificationBuilder;
use crate::spec::tests::test_utils;

type Result<T> = std::result::Result<T, SpecBuildError>;

mod basics {
    use super::*;

    #[test]
    fn nodes_keep_declaration_order() -> Result<()> {
        let spec = test_utils::directory_spec()?;
        let names: Vec<&str> = spec.nodes()
            .map(|node| node.snake_case_name())
            .collect();
        assert_eq!(
            names,
            vec!["system", "drive", "entry", "file", "directory", "mount", "error_entry"],
        );
        Ok(())
    }

    #[test]
    fn title_case_names_are_derived() -> Result<()> {
        let spec = test_utils::directory_spec()?;
        let error_entry = spec.get_node("error_entry").expect("declared");
        assert_eq!(error_entry.title_case_name(), "ErrorEntry");
        assert!(error_entry.is_error_marker());
        Ok(())
    }

    #[test]
    fn fields_resolve_to_target_node_types() -> Result<()> {
        let spec = test_utils::directory_spec()?;
        let drive = spec.get_node("drive").expect("declared");
        let root_dir = &drive.fields()[1];
        assert_eq!(root_dir.ext_type(), Some(EdgeKind::One));
        let target = root_dir.node_type(&spec).expect("node-typed field");
        assert_eq!(target.snake_case_name(), "directory");

        let letter = &drive.fields()[0];
        assert!(letter.is_primitive());
        assert_eq!(letter.ext_type(), None);
        assert!(letter.node_type(&spec).is_none());
        Ok(())
    }

    #[test]
    fn derived_lists_are_populated() -> Result<()> {
        let spec = test_utils::directory_spec()?;
        let entry = spec.get_node("entry").expect("declared");
        let derived: Vec<&str> = entry.derived()
            .iter()
            .map(|id| spec.node(*id).snake_case_name())
            .collect();
        assert_eq!(derived, vec!["file", "directory", "mount", "error_entry"]);
        assert!(!entry.is_leaf());
        assert!(spec.get_node("file").expect("declared").is_leaf());
        Ok(())
    }

    #[test]
    fn support_namespace_defaults_to_runtime_crate() -> Result<()> {
        let spec = test_utils::directory_spec()?;
        assert_eq!(spec.hooks().support_namespace(), "treegen_runtime");
        assert_eq!(spec.hooks().tree_namespace(), "treegen_runtime");
        assert_eq!(spec.hooks().initialize_function(), test_utils::INITIALIZE);
        Ok(())
    }

    #[test]
    fn tree_namespace_defaults_to_support_namespace() -> Result<()> {
        let mut builder = test_utils::directory_builder()?;
        builder.set_support_namespace("crate::support")?;
        let spec = builder.build()?;
        assert_eq!(spec.hooks().tree_namespace(), "crate::support");
        Ok(())
    }

    #[test]
    fn primitive_fields_may_carry_cardinality() -> Result<()> {
        let mut builder = SpecificationBuilder::new();
        builder.set_initialize_function(test_utils::INITIALIZE)?;
        builder.add_node(
            NodeBuilder::new("numbers", "")
                .with_prim("i64", "values", "", Some(EdgeKind::Many)),
        )?;
        let spec = builder.build()?;
        let field = &spec.get_node("numbers").expect("declared").fields()[0];
        assert_eq!(field.ext_type(), Some(EdgeKind::Many));
        assert!(matches!(field.kind(), FieldKind::Primitive { type_path, .. } if type_path == "i64"));
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn duplicate_node_name() -> Result<()> {
        let mut builder = test_utils::directory_builder()?;
        let err = builder.add_node(NodeBuilder::new("drive", "again"))
            .expect_err("duplicate");
        assert!(matches!(
            &err,
            SpecBuildError::DuplicateNodeDefinition { node_name } if node_name == "drive"
        ));
        assert_eq!(err.category(), SpecBuildErrorCategory::DuplicateDefinition);
        Ok(())
    }

    #[test]
    fn undefined_target_fails_build() -> Result<()> {
        let mut builder = test_utils::directory_builder()?;
        builder.add_node(
            NodeBuilder::new("link_farm", "")
                .with_child(EdgeKind::Any, "symlink", "links", ""),
        )?;
        let err = builder.build().expect_err("unresolved");
        assert_eq!(err.to_string(), "use of undefined node symlink");
        assert_eq!(err.category(), SpecBuildErrorCategory::UnresolvedReference);
        Ok(())
    }

    #[test]
    fn unknown_parent_id() {
        let mut builder = SpecificationBuilder::new();
        let err = builder.add_node(NodeBuilder::new("orphan", "").derive_from(NodeTypeId(3)))
            .expect_err("no such parent");
        assert!(matches!(err, SpecBuildError::UnknownParentNode { .. }));
        assert_eq!(err.category(), SpecBuildErrorCategory::UnresolvedReference);
    }

    #[test]
    fn missing_initialize_function() -> Result<()> {
        let mut builder = SpecificationBuilder::new();
        builder.add_node(NodeBuilder::new("leaf", ""))?;
        let err = builder.build().expect_err("no initializer");
        assert!(matches!(err, SpecBuildError::MissingInitializeFunction));
        assert_eq!(err.category(), SpecBuildErrorCategory::ConfigurationError);
        Ok(())
    }

    #[test]
    fn hooks_may_only_be_set_once() -> Result<()> {
        let mut builder = test_utils::directory_builder()?;
        assert!(matches!(
            builder.set_initialize_function("other::initialize"),
            Err(SpecBuildError::DuplicateConfiguration { setting: "initialization function" }),
        ));
        assert!(builder.set_serdes_functions("a", "b").is_err());
        builder.set_source_location("crate::Loc")?;
        assert!(builder.set_source_location("crate::Loc").is_err());
        builder.set_tree_namespace("crate::tree")?;
        assert!(builder.set_tree_namespace("crate::tree").is_err());
        Ok(())
    }

    #[test]
    fn inherited_field_redeclared() -> Result<()> {
        let mut builder = test_utils::directory_builder()?;
        let entry = NodeTypeId(2);
        builder.add_node(
            NodeBuilder::new("symlink", "")
                .derive_from(entry)
                .with_prim("String", "name", "", None),
        )?;
        let err = builder.build().expect_err("duplicate field");
        assert!(matches!(
            err,
            SpecBuildError::DuplicateFieldDefinition { ref node_name, ref field_name }
                if node_name == "symlink" && field_name == "name"
        ));
        Ok(())
    }

    #[test]
    fn primitive_links_are_rejected() -> Result<()> {
        let mut builder = SpecificationBuilder::new();
        builder.set_initialize_function(test_utils::INITIALIZE)?;
        builder.add_node(
            NodeBuilder::new("bad", "")
                .with_prim("i64", "value", "", Some(EdgeKind::Link)),
        )?;
        let err = builder.build().expect_err("primitive link");
        assert_eq!(err.category(), SpecBuildErrorCategory::ConfigurationError);
        Ok(())
    }
}
