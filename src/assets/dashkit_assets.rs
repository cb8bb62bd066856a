#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use enum_assoc::Assoc;
use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use super::AssetProvider;

/// Icons bundled with the crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct DashkitAssets;

impl AssetProvider for DashkitAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|file| file.data)
    }

    fn list(&self, prefix: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter(|path| path.starts_with(prefix))
            .map(SharedString::from)
            .collect())
    }
}

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum DashkitIconKind {
    /// Disclosure indicator, rotated when expanded.
    #[assoc(path = "icons/chevron_down.svg".into())]
    ChevronDown,
}

impl From<DashkitIconKind> for SharedString {
    fn from(icon: DashkitIconKind) -> Self {
        icon.path()
    }
}
