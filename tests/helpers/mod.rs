// Test Helper Modules
//
// Shared by the integration tests. Each test binary pulls this in with
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]


pub use mock_gateway::*;
pub use test_data::*;
