//! Theme schema and loading for `gpui_dashkit`.
//!
//! A theme holds layout dimensions shared by every variant, plus one or more
//! color variants (e.g. dark and light). Themes are plain JSON documents.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod ext;
pub use ext::*;
