mod loader_test;
mod sanitizer_test;
