pub mod decode;
pub mod http;
pub mod trait_def;

pub use decode::decode_records;
pub use http::HttpDataSource;
pub use trait_def::{DataSource, FetchResult};
