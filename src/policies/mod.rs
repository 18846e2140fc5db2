//! Field-mapping policies: pure functions turning a raw record set from the
//! data host into the simplified records written to disk.

pub mod fields;
pub mod items;
pub mod mods;

pub use items::process_items;
pub use mods::process_mods;
