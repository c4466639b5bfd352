mod fixtures;
mod test_kv;

pub use fixtures::*;
pub use test_kv::*;
