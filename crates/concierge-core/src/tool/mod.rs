//! Tool descriptors and the builtin registry.

pub mod model;
pub mod registry;

pub use model::{ToolCategory, ToolDescriptor};
pub use registry::{builtin_tools, by_category, lookup, DEFAULT_TOOL_ID};
