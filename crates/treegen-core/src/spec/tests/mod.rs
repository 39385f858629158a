mod specification_builder_tests;
