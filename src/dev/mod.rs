/// Development utilities module
///
/// This module contains utilities for development and debugging,
/// such as screenshot capture of the picker screen.

#[cfg(feature = "development")]
pub mod screenshot;
