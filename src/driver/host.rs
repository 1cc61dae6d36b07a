//! Capabilities a host environment provides to a [`crate::WaveAnimation`].
//!
//! The driver never talks to a concrete document, scheduler or viewport
//! observer. It asks a [`FrameClock`] for ticks, is told about visibility
//! changes by the host after [`VisibilitySource::observe`], and writes path
//! data into a [`WaveSurface`].

use crate::foundation::error::{WavesError, WavesResult};

/// Identifies one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(pub u64);

/// Per-display-refresh scheduling primitive.
///
/// A tick requested here is delivered by the host through
/// [`crate::WaveAnimation::on_frame`] together with the same handle.
pub trait FrameClock {
    /// Schedule one tick on the next display refresh.
    fn request_tick(&mut self) -> TickHandle;

    /// Cancel a scheduled tick. Cancelling an unknown or already fired handle is a no-op.
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Viewport visibility observation of the root element.
///
/// After `observe`, the host reports enter/exit through
/// [`crate::WaveAnimation::on_visibility_change`].
pub trait VisibilitySource {
    /// Start observing the root element.
    fn observe(&mut self);

    /// Stop observing. Called once on teardown.
    fn disconnect(&mut self);
}

/// Root graphic element containing one path child per wave layer.
pub trait WaveSurface {
    /// Element kind, e.g. `svg`.
    fn tag_name(&self) -> &str;

    /// Number of path children.
    fn path_count(&self) -> usize;

    /// Overwrite the geometry attribute of path child `index`.
    fn set_path_data(&mut self, index: usize, d: &str);
}

/// Resolves lookup identifiers (e.g. CSS selectors) to root elements.
pub trait ElementLookup<E> {
    /// Find the element for `selector`.
    fn find(&self, selector: &str) -> Option<E>;
}

impl<E, F> ElementLookup<E> for F
where
    F: Fn(&str) -> Option<E>,
{
    fn find(&self, selector: &str) -> Option<E> {
        self(selector)
    }
}

/// Either an element handed over directly or an identifier to look up.
#[derive(Clone, Debug)]
pub enum RootTarget<E> {
    /// An already resolved element.
    Element(E),
    /// A lookup identifier.
    Selector(String),
}

impl<E: WaveSurface> RootTarget<E> {
    /// Resolve to a usable root: found, an SVG element, with at least one path child.
    pub fn resolve<L>(self, lookup: &L) -> WavesResult<E>
    where
        L: ElementLookup<E> + ?Sized,
    {
        let element = match self {
            Self::Element(e) => e,
            Self::Selector(s) => lookup.find(&s).ok_or(WavesError::RootNotFound(s))?,
        };
        check_root(&element)?;
        Ok(element)
    }
}

/// Check that `root` is an SVG element with at least one path child.
pub fn check_root<E: WaveSurface + ?Sized>(root: &E) -> WavesResult<()> {
    if !root.tag_name().eq_ignore_ascii_case("svg") {
        return Err(WavesError::NotSvgRoot(root.tag_name().to_owned()));
    }
    if root.path_count() == 0 {
        return Err(WavesError::NoPathElements);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/driver/host.rs"]
mod tests;
