//! Property-based test suites.

pub mod selection_props;
pub mod template_props;
