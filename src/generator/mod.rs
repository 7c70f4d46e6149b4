pub mod uri;

pub use uri::to_uri;
