use gpui::App;

use crate::{ActiveVariantId, Theme, ThemeError, ThemeVariantKind};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme. Selects the first variant if no variant is active yet.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Switches the active variant to the first one of the given kind.
    fn set_theme_variant(&mut self, kind: ThemeVariantKind) -> Result<(), ThemeError>;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        let theme = theme.as_ref().clone();
        tracing::debug!(theme = %theme.name, "setting theme");

        self.set_global::<Theme>(theme);

        if !self.has_global::<ActiveVariantId>() {
            self.set_global(ActiveVariantId(0));
        }
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn set_theme_variant(&mut self, kind: ThemeVariantKind) -> Result<(), ThemeError> {
        let theme = self.get_theme();

        let index = theme
            .variants
            .position(kind)
            .ok_or_else(|| ThemeError::MissingVariant {
                theme: theme.name.to_string(),
                kind,
            })?;

        self.set_global(ActiveVariantId(index));
        Ok(())
    }
}
