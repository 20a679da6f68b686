use cardsnap_geometry::{CarouselGeometry, CarouselLayout, HostState, LayoutError, Size};
use cardsnap_pager::ScrollHost;

/// A programmatic scroll the controller asked for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub offset: f32,
    pub animated: bool,
}

/// In-memory scroll container.
///
/// Geometry is resolved from `layout` and `state` on every call, so mutating
/// either (rotation, new item count) is visible to the very next controller
/// call. Programmatic scrolls land instantly.
#[derive(Debug, Clone)]
pub struct FakeScrollHost {
    layout: CarouselLayout,
    state: HostState,
    offset: f32,
    requests: Vec<ScrollRequest>,
    pinned: Vec<f32>,
}

impl FakeScrollHost {
    pub fn new(state: HostState) -> Self {
        Self {
            layout: CarouselLayout::default(),
            state,
            offset: 0.0,
            requests: Vec::new(),
            pinned: Vec::new(),
        }
    }

    /// 375x812 portrait phone showing `item_count` cards.
    pub fn portrait_phone(item_count: usize) -> Self {
        Self::new(HostState::new(Size::new(375.0, 812.0), item_count))
    }

    /// Swaps in a custom layout. Layouts a real host would reject are refused.
    pub fn with_layout(mut self, layout: CarouselLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        self.layout = layout;
        Ok(self)
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Moves the content as a user scroll would, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f32) {
        let max = self.geometry().max_scroll_offset();
        self.offset = offset.clamp(0.0, max);
    }

    /// Finger movement: positive `dx` reveals later cards.
    pub fn drag_by(&mut self, dx: f32) {
        self.scroll_to(self.offset + dx);
    }

    /// Swaps viewport sides. The offset is kept and clamped into the new range.
    pub fn rotate(&mut self) {
        self.state = self.state.rotated();
        log::debug!(
            "fake host rotated to {:?} {}x{}",
            self.state.orientation,
            self.state.viewport.width,
            self.state.viewport.height
        );
        self.scroll_to(self.offset);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.state.item_count = item_count;
        self.scroll_to(self.offset);
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.state = HostState::new(viewport, self.state.item_count);
        self.scroll_to(self.offset);
    }

    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<ScrollRequest> {
        self.requests.last().copied()
    }

    pub fn pinned_offsets(&self) -> &[f32] {
        &self.pinned
    }

    pub fn clear_records(&mut self) {
        self.requests.clear();
        self.pinned.clear();
    }
}

impl ScrollHost for FakeScrollHost {
    fn geometry(&self) -> CarouselGeometry {
        self.layout.resolve(&self.state)
    }

    fn current_offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, x: f32, animated: bool) {
        self.requests.push(ScrollRequest { offset: x, animated });
        self.offset = x;
    }

    fn pin_offset(&mut self, x: f32) {
        self.pinned.push(x);
    }
}
