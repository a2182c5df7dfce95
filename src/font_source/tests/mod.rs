//! Glyph sweep tests
//!
//! Exercises `build_font` against a backend that records every call.
