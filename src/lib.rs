//! Table-of-contents sidebar for statically generated books.
//!
//! [`widget::mount`] attaches the sidebar for one page load: it renders the
//! tree for the page's depth, marks and reveals the entry for the current
//! page, and restores the scroll offset the previous page left in the
//! session store. The `app` and `view` modules host it in an egui window.

pub mod app;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod state;
pub mod style;
pub mod toc;
pub mod view;
pub mod widget;
