//! Infrastructure layer - Storage for the remembered default name.

pub mod preferences;

pub use preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences,
};

#[cfg(any(test, feature = "test-utils"))]
pub use preferences::MockPreferenceStore;
