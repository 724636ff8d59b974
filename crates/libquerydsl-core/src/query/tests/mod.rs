mod exists_query_builder_tests;
