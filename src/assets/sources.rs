use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// A bundle of assets that can be chained into [`Assets`].
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;

    /// Paths of every asset whose path starts with `prefix`.
    fn list(&self, prefix: &str) -> Result<Vec<SharedString>>;
}

/// An [`AssetSource`] that asks each provider in order and returns the first hit.
///
/// Lets an app layer its own icons over the bundled ones:
///
/// ```ignore
/// Application::new().with_assets(assets![MyAssets, DashkitAssets]);
/// ```
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $provider:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($provider) as Box<dyn $crate::AssetProvider> ),*
        ])
    };
}

impl<const N: usize> AssetSource for Assets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        self.providers
            .iter()
            .find_map(|provider| provider.get(path))
            .map(Some)
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut paths = Vec::new();

        for provider in &self.providers {
            paths.extend(provider.list(path)?);
        }

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixed(&'static str, &'static [u8]);

    impl AssetProvider for Fixed {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            (path == self.0).then(|| Cow::Borrowed(self.1))
        }

        fn list(&self, prefix: &str) -> Result<Vec<SharedString>> {
            Ok(self
                .0
                .starts_with(prefix)
                .then(|| SharedString::from(self.0))
                .into_iter()
                .collect())
        }
    }

    #[test]
    fn test_first_provider_wins() {
        let assets = assets![
            Fixed("icons/a.svg", b"first"),
            Fixed("icons/a.svg", b"second"),
        ];

        let loaded = assets.load("icons/a.svg").unwrap().unwrap();
        assert_eq!(loaded.as_ref(), b"first");
    }

    #[test]
    fn test_missing_and_empty_paths() {
        let assets = assets![Fixed("icons/a.svg", b"a")];

        assert!(assets.load("").unwrap().is_none());

        let err = assets.load("icons/missing.svg").unwrap_err();
        assert!(err.to_string().contains("icons/missing.svg"));
    }

    #[test]
    fn test_list_merges_providers() {
        let assets = assets![Fixed("icons/a.svg", b"a"), Fixed("fonts/b.ttf", b"b")];

        assert_eq!(
            assets.list("icons/").unwrap(),
            vec![SharedString::from("icons/a.svg")]
        );
        assert_eq!(assets.list("").unwrap().len(), 2);
    }
}
