use alloc::sync::Arc;

use crate::{PeriodicityMode, ScrollEvent, Size};

/// A callback fired for every scroll notification the view forwards.
pub type OnScrollCallback = Arc<dyn Fn(ScrollEvent) + Send + Sync>;

/// Configuration for [`crate::PeriodicScrollView`].
///
/// Cheap to clone: the callback lives in an `Arc`, so adapters can tweak a field and call
/// `PeriodicScrollView::set_options` without reallocating closures.
#[derive(Clone, Default)]
pub struct PeriodicScrollOptions {
    pub periodicity: PeriodicityMode,

    /// Logical content size: the extent the content would have without periodic scrolling.
    pub content_size: Size,

    /// Optional observer for scroll notifications. Corrected frames are reported with their
    /// continuous `delta`, so observers that only track relative motion never see a jump.
    pub on_scroll: Option<OnScrollCallback>,
}

impl PeriodicScrollOptions {
    pub fn new(periodicity: PeriodicityMode, content_size: Size) -> Self {
        Self {
            periodicity,
            content_size,
            on_scroll: None,
        }
    }

    pub fn with_periodicity(mut self, periodicity: PeriodicityMode) -> Self {
        self.periodicity = periodicity;
        self
    }

    pub fn with_content_size(mut self, content_size: Size) -> Self {
        self.content_size = content_size;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PeriodicScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeriodicScrollOptions")
            .field("periodicity", &self.periodicity)
            .field("content_size", &self.content_size)
            .finish_non_exhaustive()
    }
}
