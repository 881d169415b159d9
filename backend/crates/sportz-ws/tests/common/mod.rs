#![allow(unused_imports)]

pub(crate) mod fixtures;
pub(crate) mod test_client;
pub(crate) mod test_server;

pub use fixtures::*;
pub use test_client::*;
pub use test_server::*;
