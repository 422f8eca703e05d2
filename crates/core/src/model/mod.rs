pub mod owner;
pub mod project;
pub mod section;

pub use owner::Owner;
pub use project::ProjectCatalog;
pub use section::{Section, SectionCatalog};
