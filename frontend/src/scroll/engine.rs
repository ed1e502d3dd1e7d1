use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::easing::Easing;

pub const DEFAULT_DURATION_MS: f64 = 800.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOptions {
    /// `false` jumps to the target in a single assignment.
    pub smooth: bool,
    /// Pixels subtracted from the target position, e.g. for a fixed header.
    pub offset: f64,
    /// Animation budget in milliseconds.
    pub duration: f64,
    pub easing: Easing,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            smooth: true,
            offset: 0.0,
            duration: DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

impl ScrollOptions {
    pub fn instant() -> Self {
        Self {
            smooth: false,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// The vertically scrollable surface the engine drives.
pub trait Viewport {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&self, top: f64);
}

/// Something the engine can scroll to.
pub trait ScrollTarget {
    /// Distance from the top of the viewport to the target's top edge.
    fn viewport_top(&self) -> f64;
}

/// Schedules callbacks before the next repaint.
///
/// Dropping the returned frame must deschedule its callback if it has not
/// run yet.
pub trait FrameScheduler {
    type Frame: 'static;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Frame;
}

struct Session {
    id: u64,
    start: f64,
    target: f64,
    started_at: Option<f64>,
    duration: f64,
    easing: Easing,
}

enum Step {
    Continue(f64),
    Finished(f64),
}

impl Session {
    fn step(&mut self, now: f64) -> Step {
        // Captured on the first frame so scheduling latency is not counted.
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now - started_at;
        if elapsed >= self.duration {
            return Step::Finished(self.target);
        }
        let progress = (elapsed / self.duration).clamp(0.0, 1.0);
        let eased = self.easing.apply(progress);
        Step::Continue(self.start + (self.target - self.start) * eased)
    }
}

/// Unusable durations (NaN, infinite, negative) finish on the first frame.
fn session_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

struct State<F> {
    session: Option<Session>,
    frame: Option<F>,
    next_id: u64,
}

/// Animates a [`Viewport`] towards scroll targets, one session at a time.
///
/// A new [`scroll_to`](Self::scroll_to) replaces the running session.
/// [`cancel`](Self::cancel) stops it where it is.
pub struct ScrollEngine<V, S: FrameScheduler> {
    viewport: Rc<V>,
    scheduler: Rc<S>,
    state: Rc<RefCell<State<S::Frame>>>,
}

impl<V, S: FrameScheduler> Clone for ScrollEngine<V, S> {
    fn clone(&self) -> Self {
        Self {
            viewport: Rc::clone(&self.viewport),
            scheduler: Rc::clone(&self.scheduler),
            state: Rc::clone(&self.state),
        }
    }
}

impl<V, S: FrameScheduler> PartialEq for ScrollEngine<V, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<V, S> ScrollEngine<V, S>
where
    V: Viewport + 'static,
    S: FrameScheduler + 'static,
{
    pub fn new(viewport: Rc<V>, scheduler: Rc<S>) -> Self {
        Self {
            viewport,
            scheduler,
            state: Rc::new(RefCell::new(State {
                session: None,
                frame: None,
                next_id: 0,
            })),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().session.is_some()
    }

    /// Stops the running animation, leaving the viewport where it is.
    pub fn cancel(&self) {
        let frame = {
            let mut state = self.state.borrow_mut();
            state.session = None;
            state.frame.take()
        };
        drop(frame);
    }

    pub fn scroll_to<T>(&self, target: Option<&T>, options: ScrollOptions)
    where
        T: ScrollTarget + ?Sized,
    {
        let Some(target) = target else {
            debug!("scroll_to without a target, ignoring");
            return;
        };

        self.cancel();

        let start = self.viewport.scroll_top();
        let target_position = target.viewport_top() + start - options.offset;

        if !options.smooth {
            self.viewport.set_scroll_top(target_position);
            return;
        }

        let id = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            state.session = Some(Session {
                id,
                start,
                target: target_position,
                started_at: None,
                duration: session_duration(options.duration),
                easing: options.easing,
            });
            id
        };
        self.schedule(id);
    }

    fn owns_session(&self, id: u64) -> bool {
        matches!(self.state.borrow().session, Some(Session { id: current, .. }) if current == id)
    }

    fn schedule(&self, id: u64) {
        if !self.owns_session(id) {
            return;
        }
        let viewport = Rc::clone(&self.viewport);
        let scheduler = Rc::clone(&self.scheduler);
        let state = Rc::downgrade(&self.state);
        let frame = self.scheduler.request_frame(Box::new(move |now| {
            if let Some(state) = state.upgrade() {
                ScrollEngine {
                    viewport,
                    scheduler,
                    state,
                }
                .on_frame(id, now);
            }
        }));
        self.state.borrow_mut().frame = Some(frame);
    }

    fn on_frame(&self, id: u64, now: f64) {
        let step = {
            let mut state = self.state.borrow_mut();
            match state.session.as_mut() {
                Some(session) if session.id == id => session.step(now),
                _ => return,
            }
        };

        let fired = self.state.borrow_mut().frame.take();
        drop(fired);

        match step {
            Step::Continue(position) => {
                self.viewport.set_scroll_top(position);
                self.schedule(id);
            }
            Step::Finished(target) => {
                self.viewport.set_scroll_top(target);
                self.state.borrow_mut().session = None;
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    pub struct MemoryViewport {
        top: Cell<f64>,
        writes: Cell<usize>,
    }

    impl MemoryViewport {
        pub fn at(top: f64) -> Rc<Self> {
            let viewport = Self::default();
            viewport.top.set(top);
            Rc::new(viewport)
        }

        pub fn writes(&self) -> usize {
            self.writes.get()
        }
    }

    impl Viewport for MemoryViewport {
        fn scroll_top(&self) -> f64 {
            self.top.get()
        }

        fn set_scroll_top(&self, top: f64) {
            self.top.set(top);
            self.writes.set(self.writes.get() + 1);
        }
    }

    /// A block laid out at a fixed document offset.
    pub struct Block {
        pub document_top: Cell<f64>,
        pub viewport: Rc<MemoryViewport>,
    }

    impl Block {
        pub fn new(document_top: f64, viewport: &Rc<MemoryViewport>) -> Self {
            Self {
                document_top: Cell::new(document_top),
                viewport: Rc::clone(viewport),
            }
        }
    }

    impl ScrollTarget for Block {
        fn viewport_top(&self) -> f64 {
            self.document_top.get() - self.viewport.scroll_top()
        }
    }

    pub struct ManualFrame(Rc<Cell<bool>>);

    impl Drop for ManualFrame {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    type Pending = (Rc<Cell<bool>>, Box<dyn FnOnce(f64)>);

    /// Runs frame callbacks only when the test says so.
    #[derive(Default)]
    pub struct ManualScheduler {
        queue: RefCell<Vec<Pending>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|(cancelled, _)| !cancelled.get())
                .count()
        }

        pub fn run_frame(&self, now: f64) {
            self.run(now, false);
        }

        /// Also invokes callbacks whose frames were dropped.
        pub fn run_frame_ignoring_cancellation(&self, now: f64) {
            self.run(now, true);
        }

        fn run(&self, now: f64, include_cancelled: bool) {
            let due: Vec<Pending> = self.queue.borrow_mut().drain(..).collect();
            for (cancelled, callback) in due {
                if include_cancelled || !cancelled.get() {
                    callback(now);
                }
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Frame = ManualFrame;

        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> ManualFrame {
            let cancelled = Rc::new(Cell::new(false));
            self.queue
                .borrow_mut()
                .push((Rc::clone(&cancelled), callback));
            ManualFrame(cancelled)
        }
    }

    pub fn engine_at(
        top: f64,
    ) -> (
        ScrollEngine<MemoryViewport, ManualScheduler>,
        Rc<MemoryViewport>,
        Rc<ManualScheduler>,
    ) {
        let viewport = MemoryViewport::at(top);
        let scheduler = Rc::new(ManualScheduler::default());
        let engine = ScrollEngine::new(Rc::clone(&viewport), Rc::clone(&scheduler));
        (engine, viewport, scheduler)
    }

    /// Steps frames 16 ms apart until the engine goes idle.
    pub fn settle(
        engine: &ScrollEngine<MemoryViewport, ManualScheduler>,
        scheduler: &ManualScheduler,
        mut now: f64,
    ) -> f64 {
        for _ in 0..10_000 {
            if !engine.is_active() {
                break;
            }
            scheduler.run_frame(now);
            now += 16.0;
        }
        now
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn linear_scroll_hits_midpoint_and_target() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let block = Block::new(2000.0, &viewport);
        let options = ScrollOptions::default()
            .with_offset(80.0)
            .with_duration(600.0)
            .with_easing(Easing::Linear);

        engine.scroll_to(Some(&block), options);
        assert_eq!(viewport.scroll_top(), 0.0);
        assert_eq!(scheduler.pending(), 1);

        scheduler.run_frame(1_000.0);
        assert_eq!(viewport.scroll_top(), 0.0);

        scheduler.run_frame(1_300.0);
        assert_eq!(viewport.scroll_top(), 960.0);

        scheduler.run_frame(1_600.0);
        assert_eq!(viewport.scroll_top(), 1920.0);
        assert!(!engine.is_active());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn settles_exactly_on_target() {
        for easing in Easing::ALL {
            for &(offset, duration) in &[(0.0, 800.0), (80.0, 600.0), (100.0, 333.0), (13.7, 1.0)] {
                let (engine, viewport, scheduler) = engine_at(137.3);
                let block = Block::new(4321.9, &viewport);
                let expected = block.viewport_top() + viewport.scroll_top() - offset;
                engine.scroll_to(
                    Some(&block),
                    ScrollOptions::default()
                        .with_offset(offset)
                        .with_duration(duration)
                        .with_easing(easing),
                );
                settle(&engine, &scheduler, 0.0);
                assert_eq!(viewport.scroll_top(), expected, "{:?}", easing);
            }
        }
    }

    #[test]
    fn instant_scroll_is_synchronous() {
        let (engine, viewport, scheduler) = engine_at(250.0);
        let block = Block::new(1200.0, &viewport);

        engine.scroll_to(Some(&block), ScrollOptions::instant().with_offset(100.0));

        assert_eq!(viewport.scroll_top(), 1100.0);
        assert_eq!(viewport.writes(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert!(!engine.is_active());
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let (engine, viewport, scheduler) = engine_at(40.0);
        let block = Block::new(900.0, &viewport);
        engine.scroll_to(Some(&block), ScrollOptions::default());

        engine.scroll_to::<Block>(None, ScrollOptions::default());

        assert!(engine.is_active());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(viewport.scroll_top(), 40.0);
    }

    #[test]
    fn second_request_supersedes_first() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let first = Block::new(1000.0, &viewport);
        let second = Block::new(3000.0, &viewport);
        let linear = ScrollOptions::default().with_easing(Easing::Linear);

        engine.scroll_to(Some(&first), linear);
        scheduler.run_frame(0.0);
        scheduler.run_frame(100.0);
        let interrupted_at = viewport.scroll_top();
        assert!(interrupted_at > 0.0 && interrupted_at < 1000.0);

        let expected = second.viewport_top() + viewport.scroll_top();
        engine.scroll_to(Some(&second), linear);
        assert_eq!(scheduler.pending(), 1);

        // The first session's callback fires anyway; it must not move anything.
        scheduler.run_frame_ignoring_cancellation(200.0);
        assert_eq!(viewport.scroll_top(), interrupted_at);

        settle(&engine, &scheduler, 216.0);
        assert_eq!(viewport.scroll_top(), expected);
    }

    #[test]
    fn cancel_leaves_viewport_in_place() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let block = Block::new(2000.0, &viewport);
        engine.scroll_to(Some(&block), ScrollOptions::default());
        scheduler.run_frame(0.0);
        scheduler.run_frame(200.0);
        let stopped_at = viewport.scroll_top();
        let writes = viewport.writes();

        engine.cancel();

        assert!(!engine.is_active());
        assert_eq!(scheduler.pending(), 0);
        scheduler.run_frame_ignoring_cancellation(400.0);
        assert_eq!(viewport.scroll_top(), stopped_at);
        assert_eq!(viewport.writes(), writes);
    }

    #[test]
    fn start_time_is_taken_from_first_frame() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let block = Block::new(1000.0, &viewport);
        engine.scroll_to(
            Some(&block),
            ScrollOptions::default()
                .with_duration(1000.0)
                .with_easing(Easing::Linear),
        );

        scheduler.run_frame(50_000.0);
        assert_eq!(viewport.scroll_top(), 0.0);
        scheduler.run_frame(50_250.0);
        assert_eq!(viewport.scroll_top(), 250.0);
    }

    #[test]
    fn zero_duration_lands_on_first_frame() {
        let (engine, viewport, scheduler) = engine_at(10.0);
        let block = Block::new(510.0, &viewport);
        engine.scroll_to(Some(&block), ScrollOptions::default().with_duration(0.0));

        scheduler.run_frame(5.0);

        assert_eq!(viewport.scroll_top(), 510.0);
        assert!(!engine.is_active());
    }

    #[test]
    fn target_is_resolved_once() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let block = Block::new(1500.0, &viewport);
        engine.scroll_to(Some(&block), ScrollOptions::default());
        scheduler.run_frame(0.0);

        block.document_top.set(1800.0);
        settle(&engine, &scheduler, 16.0);

        assert_eq!(viewport.scroll_top(), 1500.0);
    }

    #[test]
    fn invalid_duration_lands_on_first_frame() {
        for duration in [f64::NAN, f64::INFINITY, -250.0] {
            let (engine, viewport, scheduler) = engine_at(0.0);
            let block = Block::new(900.0, &viewport);
            engine.scroll_to(Some(&block), ScrollOptions::default().with_duration(duration));

            scheduler.run_frame(40.0);

            assert_eq!(viewport.scroll_top(), 900.0);
            assert!(!engine.is_active());
            assert_eq!(scheduler.pending(), 0);
        }
    }
}
