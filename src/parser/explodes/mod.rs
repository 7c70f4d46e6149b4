pub mod common;
pub mod ss;

pub use common::{explode_uri, UriScheme};
pub use ss::decode_uri;
