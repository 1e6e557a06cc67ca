mod point_tests;
mod record_tests;
