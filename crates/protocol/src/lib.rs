pub mod commands;
pub mod project;
pub mod snapshot;
pub mod theme;
pub mod types;
pub mod view;

pub use commands::ViewCommand;
pub use project::{Link, Project};
pub use snapshot::{ModalState, ViewSnapshot};
pub use theme::ThemeToken;
pub use types::{Extent, SectionId};
pub use view::{ModalView, NavItem, ProjectCard};
