mod sources;
pub use sources::*;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        mod dashkit_assets;
        pub use dashkit_assets::*;
    }
);
