//! Tailwind utility classes used by the root view.
//!
//! These are resolved by Tailwind at page load, nothing here interprets them.

/// Full viewport height, flex centered on both axes, light neutral background.
pub const CONTAINER: &str = "min-h-screen bg-gray-50 flex items-center justify-center";

pub const BLOCK: &str = "text-center";

pub const HEADING: &str = "text-4xl font-bold text-gray-900 mb-4";

pub const SUBTITLE: &str = "text-gray-600";
