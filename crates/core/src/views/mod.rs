pub mod cards;
pub mod modal;
pub mod nav;

pub use cards::project_cards;
pub use modal::modal_view;
pub use nav::nav_items;
