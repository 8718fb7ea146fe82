//! User interface module - everything printed for the user.
//!
//! Diagnostics for developers go through `tracing` instead (see
//! [crate::logging]).

pub mod formatter;

pub use formatter::{
    display_error, display_status, display_success, display_tag_collision, display_transition,
    display_warning, display_would_tag, format_pretend_marker, format_tag_collision,
    format_transition,
};
