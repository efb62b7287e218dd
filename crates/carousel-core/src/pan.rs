//! Drag state machine and the clamped strip offset.

/// Pointer input relevant to panning, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { x: f64 },
    Move { x: f64 },
    Up,
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last_x: f64,
    },
}

/// What a pointer input did to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Started,
    Moved { offset: f64 },
    Ended,
    Ignored,
}

/// Allowed offset range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    pub min: f64,
    pub max: f64,
}

impl PanBounds {
    /// Bounds keeping the strip covering the viewport: `[W - total, 0]`.
    ///
    /// A strip narrower than the viewport would invert the range; it is pinned
    /// at offset 0 instead.
    pub fn for_strip(viewport_width: f64, total_width: f64) -> Self {
        let min = viewport_width - total_width;
        if min > 0.0 {
            log::warn!(
                "[pan] strip ({total_width}px) narrower than viewport ({viewport_width}px); panning disabled"
            );
        }
        Self {
            min: min.min(0.0),
            max: 0.0,
        }
    }

    /// Clamp a proposed offset, upper bound first.
    #[inline]
    pub fn clamp(&self, proposed: f64) -> f64 {
        if proposed >= self.max {
            self.max
        } else if proposed <= self.min {
            self.min
        } else {
            proposed
        }
    }
}

#[derive(Clone, Debug)]
pub struct PanController {
    offset: f64,
    bounds: PanBounds,
    state: DragState,
}

impl PanController {
    pub fn new(bounds: PanBounds) -> Self {
        Self {
            offset: 0.0,
            bounds,
            state: DragState::Idle,
        }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn bounds(&self) -> PanBounds {
        self.bounds
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn handle(&mut self, input: PointerInput) -> PanEvent {
        match input {
            PointerInput::Down { x } => self.pointer_down(x),
            PointerInput::Move { x } => self.pointer_move(x),
            PointerInput::Up | PointerInput::Leave => self.pointer_up(),
        }
    }

    /// Start (or restart) a drag session at `x`.
    pub fn pointer_down(&mut self, x: f64) -> PanEvent {
        self.state = DragState::Dragging { last_x: x };
        log::debug!("[pan] drag start x={x:.1} offset={:.1}", self.offset);
        PanEvent::Started
    }

    pub fn pointer_move(&mut self, x: f64) -> PanEvent {
        let DragState::Dragging { last_x } = self.state else {
            return PanEvent::Ignored;
        };
        let offset = self.apply_delta(x - last_x);
        self.state = DragState::Dragging { last_x: x };
        PanEvent::Moved { offset }
    }

    /// End the drag session; also used for pointer-leave.
    pub fn pointer_up(&mut self) -> PanEvent {
        if !self.is_dragging() {
            return PanEvent::Ignored;
        }
        self.state = DragState::Idle;
        log::debug!("[pan] drag end offset={:.1}", self.offset);
        PanEvent::Ended
    }

    /// Shift the offset by `dx` and clamp it. Returns the new offset.
    pub fn apply_delta(&mut self, dx: f64) -> f64 {
        self.offset = self.bounds.clamp(self.offset + dx);
        self.offset
    }
}
