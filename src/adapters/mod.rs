// Adapters layer: concrete line sources for the session.

pub mod reader;
