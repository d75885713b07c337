//! Presentation of aggregated trees for external render surfaces.
//!
//! The presenter produces content only: names, figures, severities and
//! synthetic ids. Layout and expand/collapse state belong to whatever
//! renders the records.

pub mod summary;
pub mod tree_presenter;

// Re-export main types
pub use summary::{summarize, title_for, Summary};
pub use tree_presenter::{
    flatten, present_tree, DirectFigures, Presentation, PresentationNode, TreePresenter,
};
