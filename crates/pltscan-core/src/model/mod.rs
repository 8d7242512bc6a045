//! Data model — discovered files, report records and layouts.
pub mod discovered;
pub mod layout;
pub mod record;
pub mod size;

pub use discovered::DiscoveredFile;
pub use layout::Layout;
pub use record::Record;
