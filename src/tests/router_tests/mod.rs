mod api_tests;
mod export_tests;
mod search_tests;
