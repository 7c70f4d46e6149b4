pub mod explodes;
pub mod fields;
pub mod input;

pub use explodes::{decode_uri, explode_uri, UriScheme};
pub use fields::decode_fields;
pub use input::ProxyInput;
