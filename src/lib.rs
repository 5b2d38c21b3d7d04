pub mod models;
pub mod normalizer;

pub use models::TagList;
pub use normalizer::{NormalizeError, TAGS_VAR, normalize, normalize_env, normalize_to_json};
