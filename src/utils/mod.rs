//! Small shared helpers.

pub mod object_id;
