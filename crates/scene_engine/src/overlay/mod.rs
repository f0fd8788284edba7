//! HTML overlay support
//!
//! The overlay renders HTML on top of the 3D view inside a host that embeds a
//! JavaScript engine. Only the DOM event bridge lives here.

pub mod dom;
