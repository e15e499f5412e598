pub mod mock_data;

pub use mock_data::*;
