use crate::{Point, Size};

/// The scroll surface a [`crate::PeriodicScrollView`] drives.
///
/// This is the only capability the engine needs from a UI toolkit: a content size it can set,
/// an offset it can read and rewrite, and the size of the visible viewport. Drag handling,
/// momentum and rendering all stay in the host.
///
/// The host delivers its "offset changed" notification by calling
/// [`crate::PeriodicScrollView::did_scroll`].
pub trait ScrollHost {
    fn viewport_size(&self) -> Size;

    fn content_size(&self) -> Size;

    fn set_content_size(&mut self, size: Size);

    fn content_offset(&self) -> Point;

    /// Moves the visible offset without animation.
    fn set_content_offset(&mut self, offset: Point);

    /// Enables or disables the host's own "offset changed" notification.
    ///
    /// The engine suppresses notifications around its corrective writes so that observers never
    /// see the wrap as a separate scroll. Hosts that cannot re-enter the engine synchronously
    /// may keep the default no-op.
    fn set_scroll_notifications_suppressed(&mut self, suppressed: bool) {
        let _ = suppressed;
    }
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }

    fn content_size(&self) -> Size {
        (**self).content_size()
    }

    fn set_content_size(&mut self, size: Size) {
        (**self).set_content_size(size);
    }

    fn content_offset(&self) -> Point {
        (**self).content_offset()
    }

    fn set_content_offset(&mut self, offset: Point) {
        (**self).set_content_offset(offset);
    }

    fn set_scroll_notifications_suppressed(&mut self, suppressed: bool) {
        (**self).set_scroll_notifications_suppressed(suppressed);
    }
}
