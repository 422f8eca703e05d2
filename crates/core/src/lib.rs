pub mod catalog;
pub mod contact;
pub mod controller;
pub mod layout;
pub mod model;
pub mod scroll;
pub mod signal;
pub mod views;

pub use catalog::{CatalogError, SiteCatalog};
pub use contact::{ContactError, ContactForm, ContactSubmission};
pub use controller::{ControllerError, ViewStateController};
pub use layout::{LayoutSource, SectionLayout};
pub use signal::{ScrollFeed, ScrollSubscription};
