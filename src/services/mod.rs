pub mod supervisor;

pub use supervisor::{is_valid_unit_name, query_unit_active};
