//! Command-line host for the pager: argument types, dispatch, and the
//! interactive browsing session.

pub mod dispatcher;
pub mod interactive;
pub mod main_types;
pub mod output;
