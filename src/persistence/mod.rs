pub mod files;
pub mod metadata;
pub mod parser;
pub mod serializer;

pub use files::{
    atomic_write, data_file, ensure_swot_dir, get_swot_dir, init_local_swot, meta_file, read_file,
};
pub use metadata::{load_metadata, save_metadata, TrackerMeta};
pub use parser::{load_store, parse_store, LoadedStore, ParseWarning};
pub use serializer::{save_store, serialize_store, HEADER};
