mod json_value_sink_tests;
