//! Slider state machine.
//!
//! `SliderCore` holds everything about a slider that does not need the DOM:
//! the measured geometry, the current offset (and index, for indexed
//! navigation), the in-flight flag, the drag capture, and the hover flag.
//! Every operation returns the [`Action`]s the host must carry out, so the
//! whole interaction model is testable natively.
//!
//! Offsets are always kept inside `[0, metrics.max_offset()]`.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::{EdgePolicy, Navigation, SliderConfig};
use crate::geometry::Metrics;
use crate::input::{Direction, DragState, Key, Motion};

/// Side effects requested by the core for the host to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the track to `offset`, animated when `smooth`.
    MoveTo { offset: f64, smooth: bool },
    /// Call [`SliderCore::settle`] after `delay_ms`.
    ScheduleSettle { delay_ms: u32 },
    /// Render control visibility and enabled state.
    UpdateControls(ControlState),
    /// Suppress the triggering event's default browser behavior.
    PreventDefault,
}

/// Rendered state of one navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// The track does not overflow; there is nowhere to go.
    #[default]
    Hidden,
    /// Visible, but the track already sits at this control's end.
    Disabled,
    Enabled,
}

/// State of the previous/next control pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub prev: Control,
    pub next: Control,
}

impl ControlState {
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.prev == Control::Enabled
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.next == Control::Enabled
    }

    fn allows(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.can_go_previous(),
            Direction::Next => self.can_go_next(),
        }
    }
}

/// Browser-independent slider state.
#[derive(Debug, Clone)]
pub struct SliderCore {
    config: SliderConfig,
    metrics: Metrics,
    item_extent: f64,
    offset: f64,
    /// Current discrete position; only meaningful for [`Navigation::Indexed`].
    index: usize,
    motion: Motion,
    drag: DragState,
    hovered: bool,
    controls: ControlState,
}

impl Default for SliderCore {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl SliderCore {
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let item_extent = config.default_step_px;
        let mut core = Self {
            config,
            metrics: Metrics::default(),
            item_extent,
            offset: 0.0,
            index: 0,
            motion: Motion::Idle,
            drag: DragState::Idle,
            hovered: false,
            controls: ControlState::default(),
        };
        core.recompute_control_state();
        core
    }

    // --- Measurements ---

    /// Replace the measured geometry and pull the position back into range.
    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
        self.reposition();
    }

    /// Record the track's actual scroll position.
    ///
    /// Native scrolling and dragging move a scroll-mode track behind the
    /// core's back; the host feeds `scrollLeft` in here. Indexed tracks own
    /// their position, so this is ignored for them.
    pub fn observe_offset(&mut self, offset: f64) {
        if self.config.navigation == Navigation::Scroll {
            self.offset = self.metrics.clamp(offset);
        }
    }

    /// Set the step distance from the first item's rendered width and the
    /// track's gap.
    ///
    /// With no measurable item the previous extent is kept. A gap that is
    /// missing or not a number falls back to the configured gap.
    pub fn recompute_item_extent(&mut self, item_width: Option<f64>, gap: Option<f64>) -> f64 {
        if let Some(width) = item_width.filter(|w| w.is_finite() && *w > 0.0) {
            let gap = gap
                .filter(|g| g.is_finite() && *g >= 0.0)
                .unwrap_or(self.config.fallback_gap_px);
            self.item_extent = width + gap;
            self.reposition();
        }
        self.item_extent
    }

    fn reposition(&mut self) {
        match self.config.navigation {
            Navigation::Scroll => self.offset = self.metrics.clamp(self.offset),
            Navigation::Indexed => {
                self.index = self.index.min(self.max_index());
                self.offset = self.metrics.offset_for_index(self.index, self.item_extent);
            }
        }
    }

    // --- Stepping ---

    /// Move the window one item toward the end.
    pub fn advance(&mut self) -> Vec<Action> {
        self.step(Direction::Next)
    }

    /// Move the window one item toward the start.
    pub fn retreat(&mut self) -> Vec<Action> {
        self.step(Direction::Previous)
    }

    /// Step one item in `direction`.
    ///
    /// Dropped while a previous step is settling, and when there is nowhere
    /// to go under [`EdgePolicy::Clamp`].
    pub fn step(&mut self, direction: Direction) -> Vec<Action> {
        if self.motion.is_animating() {
            return Vec::new();
        }
        let target = match self.config.navigation {
            Navigation::Scroll => self.scroll_target(direction),
            Navigation::Indexed => self.index_target(direction).map(|index| {
                self.index = index;
                self.metrics.offset_for_index(index, self.item_extent)
            }),
        };
        let Some(target) = target else {
            return Vec::new();
        };
        self.offset = target;
        self.motion = Motion::Animating { target };
        vec![
            Action::MoveTo { offset: target, smooth: true },
            Action::ScheduleSettle { delay_ms: self.config.settle_ms },
        ]
    }

    fn scroll_target(&self, direction: Direction) -> Option<f64> {
        let tolerance = self.config.edge_tolerance_px;
        let at_edge = match direction {
            Direction::Previous => self.metrics.at_start(self.offset, tolerance),
            Direction::Next => self.metrics.at_end(self.offset, tolerance),
        };
        if at_edge && self.wraps() {
            return Some(match direction {
                Direction::Previous => self.metrics.max_offset(),
                Direction::Next => 0.0,
            });
        }
        let target = self.metrics.clamp(self.offset + direction.sign() * self.item_extent);
        ((target - self.offset).abs() > f64::EPSILON).then_some(target)
    }

    fn index_target(&self, direction: Direction) -> Option<usize> {
        let max_index = self.max_index();
        match direction {
            Direction::Next if self.index < max_index => Some(self.index + 1),
            Direction::Previous if self.index > 0 => Some(self.index - 1),
            Direction::Next if self.wraps() => Some(0),
            Direction::Previous if self.wraps() => Some(max_index),
            _ => None,
        }
    }

    fn max_index(&self) -> usize {
        self.metrics.max_index(self.item_extent, self.config.edge_tolerance_px)
    }

    fn wraps(&self) -> bool {
        self.config.edge_policy == EdgePolicy::Wrap && self.metrics.overflows()
    }

    /// End the in-flight step and refresh the controls.
    pub fn settle(&mut self) -> Vec<Action> {
        self.motion = Motion::Idle;
        vec![Action::UpdateControls(self.recompute_control_state())]
    }

    // --- Controls ---

    /// Derive the control pair from the current offset and store it as the
    /// rendered state.
    pub fn recompute_control_state(&mut self) -> ControlState {
        self.controls = self.compute_controls();
        self.controls
    }

    fn compute_controls(&self) -> ControlState {
        if !self.metrics.overflows() {
            return ControlState { prev: Control::Hidden, next: Control::Hidden };
        }
        if self.wraps() {
            return ControlState { prev: Control::Enabled, next: Control::Enabled };
        }
        let tolerance = self.config.edge_tolerance_px;
        let edge = |at_edge: bool| if at_edge { Control::Disabled } else { Control::Enabled };
        ControlState {
            prev: edge(self.metrics.at_start(self.offset, tolerance)),
            next: edge(self.metrics.at_end(self.offset, tolerance)),
        }
    }

    // --- Drag ---

    /// Capture the pointer position (relative to the track) and the current offset.
    pub fn drag_start(&mut self, x: f64) {
        self.drag = DragState::Active { start_x: x, start_offset: self.offset };
    }

    /// Follow the pointer. Ignored unless a drag is active.
    pub fn drag_move(&mut self, x: f64) -> Vec<Action> {
        let DragState::Active { start_x, start_offset } = self.drag else {
            return Vec::new();
        };
        let delta = (x - start_x) * self.config.drag_multiplier;
        self.offset = self.metrics.clamp(start_offset - delta);
        vec![Action::PreventDefault, Action::MoveTo { offset: self.offset, smooth: false }]
    }

    /// Release the drag and refresh the controls.
    ///
    /// Indexed tracks snap to the nearest item.
    pub fn drag_end(&mut self) -> Vec<Action> {
        let was_dragging = self.drag.is_active();
        self.drag = DragState::Idle;
        let mut actions = Vec::new();
        if was_dragging && self.config.navigation == Navigation::Indexed {
            self.index = self.metrics.nearest_index(self.offset, self.item_extent, self.config.edge_tolerance_px);
            self.offset = self.metrics.offset_for_index(self.index, self.item_extent);
            actions.push(Action::MoveTo { offset: self.offset, smooth: true });
        }
        actions.push(Action::UpdateControls(self.recompute_control_state()));
        actions
    }

    // --- Keyboard / hover ---

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Arrow keys step while the pointer is over the container.
    ///
    /// `pointer_over` is the host's `:hover` reading at key time and replaces
    /// the tracked hover flag. `None` keeps the tracked flag.
    ///
    /// Any arrow key over a hovered slider suppresses the page scroll, even
    /// when its control is disabled.
    pub fn key_down(&mut self, key: Key, pointer_over: Option<bool>) -> Vec<Action> {
        if let Some(hovered) = pointer_over {
            self.hovered = hovered;
        }
        if !self.config.keyboard || !self.hovered {
            return Vec::new();
        }
        let Some(direction) = key.direction() else {
            return Vec::new();
        };
        let mut actions = vec![Action::PreventDefault];
        if self.compute_controls().allows(direction) {
            actions.extend(self.step(direction));
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Control state as last recomputed.
    #[must_use]
    pub fn controls(&self) -> ControlState {
        self.controls
    }
}
