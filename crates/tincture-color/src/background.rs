//! Backgrounds and flattening.
//!
//! A translucent color can carry the color it will be painted over. That
//! background is what [`Color::flatten`] composites against, and what the
//! `flat` render mode uses to produce an opaque fallback. Backgrounds are
//! always opaque; without one, colors flatten against white.

use crate::color::{Color, ColorKind};

impl Color {
    /// The background set on this color, if any.
    #[must_use]
    pub fn background(&self) -> Option<&Self> {
        self.background.as_deref()
    }

    /// Whether a background was set.
    #[must_use]
    pub const fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// The background used for flattening: the one set, or opaque white.
    #[must_use]
    pub fn effective_background(&self) -> Self {
        self.background
            .as_deref()
            .cloned()
            .unwrap_or(Self::WHITE)
    }

    /// Attach a background, made fully opaque.
    ///
    /// The background's own background is dropped. The `transparent`
    /// keyword never carries a background and is returned unchanged.
    #[must_use]
    pub fn with_background(mut self, mut background: Self) -> Self {
        if self.is_transparent() {
            return self;
        }
        if background.is_transparent() {
            // opaque black is no longer the transparent keyword
            background.kind = ColorKind::Hex;
        }
        background.alpha = 1.0;
        background.background = None;
        self.background = Some(Box::new(background));
        self
    }

    /// Composite this color onto its background.
    ///
    /// Opaque colors are returned unchanged. Otherwise the result is opaque,
    /// keeps this color's kind where the new channels allow it (hex
    /// otherwise) and keeps the background.
    ///
    /// ```
    /// use tincture_color::{color_args, Color};
    ///
    /// let pink = Color::builder(color_args![255, 0, 0])
    ///     .alpha(0.5)
    ///     .build()
    ///     .unwrap()
    ///     .flatten();
    /// assert_eq!(pink.bytes(), [255, 128, 128]);
    /// assert_eq!(pink.alpha(), 1.0);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Self {
        if !self.is_translucent() {
            return self.clone();
        }
        let mut flat = self
            .effective_background()
            .layer(self)
            .preferring(self.kind);
        flat.background.clone_from(&self.background);
        flat
    }
}
