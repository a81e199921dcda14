mod argument_descriptor_tests;
