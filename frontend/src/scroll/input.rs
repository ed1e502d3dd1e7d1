use log::debug;

use super::anchor::{AnchorLink, PageLocation, ANCHOR_OFFSET};
use super::engine::{FrameScheduler, ScrollEngine, ScrollOptions, ScrollTarget, Viewport};

/// User gestures that take the scroll position back from the engine.
pub const INTERRUPT_EVENTS: [&str; 2] = ["wheel", "touchstart"];

/// Finds the element a fragment id names.
pub trait TargetLookup {
    type Target: ScrollTarget;

    fn find(&self, id: &str) -> Option<Self::Target>;
}

/// Records the fragment of a followed anchor in the session history.
pub trait HistorySink {
    fn push_hash(&self, hash: &str);
}

/// Stops a running animation when `event_type` is a user scroll gesture.
/// Returns `true` if a session was stopped.
pub fn interrupt<V, S>(engine: &ScrollEngine<V, S>, event_type: &str) -> bool
where
    V: Viewport + 'static,
    S: FrameScheduler + 'static,
{
    if !INTERRUPT_EVENTS.contains(&event_type) || !engine.is_active() {
        return false;
    }
    engine.cancel();
    true
}

/// Smooth-scrolls to the target of a clicked same-page anchor and records
/// its fragment.
///
/// Returns `true` when the click was taken over and the browser's default
/// navigation must be prevented. Links that leave the page, carry no
/// fragment or point at a missing element return `false`.
pub fn follow_anchor<V, S, L, H>(
    engine: &ScrollEngine<V, S>,
    link: &AnchorLink<'_>,
    page: &PageLocation<'_>,
    lookup: &L,
    history: &H,
) -> bool
where
    V: Viewport + 'static,
    S: FrameScheduler + 'static,
    L: TargetLookup,
    H: HistorySink,
{
    let Some(id) = link.in_page_target(page) else {
        return false;
    };
    let Some(target) = lookup.find(&id) else {
        debug!("anchor points at missing #{}", id);
        return false;
    };

    engine.scroll_to(Some(&target), ScrollOptions::default().with_offset(ANCHOR_OFFSET));
    history.push_hash(link.hash);
    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::scroll::easing::Easing;
    use crate::scroll::engine::testing::*;

    /// Blocks laid out at fixed document offsets, keyed by id.
    struct Page {
        viewport: Rc<MemoryViewport>,
        blocks: HashMap<&'static str, f64>,
    }

    impl TargetLookup for Page {
        type Target = Block;

        fn find(&self, id: &str) -> Option<Block> {
            self.blocks
                .get(id)
                .map(|&top| Block::new(top, &self.viewport))
        }
    }

    #[derive(Default)]
    struct RecordedHistory(RefCell<Vec<String>>);

    impl HistorySink for RecordedHistory {
        fn push_hash(&self, hash: &str) {
            self.0.borrow_mut().push(hash.to_string());
        }
    }

    const LOCATION: PageLocation<'static> = PageLocation {
        host: "cafemrp.com",
        pathname: "/",
    };

    fn link(hash: &str) -> AnchorLink<'_> {
        AnchorLink {
            host: "cafemrp.com",
            pathname: "/",
            hash,
            opted_out: false,
        }
    }

    fn page(viewport: &Rc<MemoryViewport>) -> Page {
        Page {
            viewport: Rc::clone(viewport),
            blocks: HashMap::from([("section2", 1500.0), ("visit", 3200.0)]),
        }
    }

    #[test]
    fn same_page_anchor_lands_below_navbar_and_records_hash() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let history = RecordedHistory::default();

        let taken = follow_anchor(&engine, &link("#section2"), &LOCATION, &page(&viewport), &history);

        assert!(taken);
        assert!(engine.is_active());
        assert_eq!(*history.0.borrow(), vec!["#section2".to_string()]);

        settle(&engine, &scheduler, 0.0);
        assert_eq!(viewport.scroll_top(), 1500.0 - ANCHOR_OFFSET);
    }

    #[test]
    fn missing_target_keeps_native_navigation() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let history = RecordedHistory::default();

        let taken = follow_anchor(&engine, &link("#nowhere"), &LOCATION, &page(&viewport), &history);

        assert!(!taken);
        assert!(!engine.is_active());
        assert_eq!(scheduler.pending(), 0);
        assert!(history.0.borrow().is_empty());
    }

    #[test]
    fn opted_out_and_offsite_anchors_are_left_alone() {
        let (engine, viewport, _) = engine_at(0.0);
        let history = RecordedHistory::default();
        let lookup = page(&viewport);

        let opted_out = AnchorLink {
            opted_out: true,
            ..link("#visit")
        };
        let offsite = AnchorLink {
            host: "instagram.com",
            ..link("#visit")
        };

        assert!(!follow_anchor(&engine, &opted_out, &LOCATION, &lookup, &history));
        assert!(!follow_anchor(&engine, &offsite, &LOCATION, &lookup, &history));
        assert!(history.0.borrow().is_empty());
    }

    #[test]
    fn wheel_mid_animation_freezes_position() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let block = Block::new(1000.0, &viewport);
        let options = ScrollOptions::default()
            .with_duration(600.0)
            .with_easing(Easing::Linear);
        engine.scroll_to(Some(&block), options);

        scheduler.run_frame(0.0);
        scheduler.run_frame(300.0);
        assert_eq!(viewport.scroll_top(), 500.0);

        assert!(interrupt(&engine, "wheel"));
        assert!(!engine.is_active());
        assert_eq!(scheduler.pending(), 0);

        scheduler.run_frame_ignoring_cancellation(450.0);
        assert_eq!(viewport.scroll_top(), 500.0);
    }

    #[test]
    fn touchstart_interrupts_but_other_events_do_not() {
        let (engine, viewport, scheduler) = engine_at(0.0);
        let block = Block::new(800.0, &viewport);
        engine.scroll_to(Some(&block), ScrollOptions::default());
        scheduler.run_frame(0.0);

        assert!(!interrupt(&engine, "scroll"));
        assert!(!interrupt(&engine, "keydown"));
        assert!(engine.is_active());

        assert!(interrupt(&engine, "touchstart"));
        assert!(!engine.is_active());
    }

    #[test]
    fn interrupt_when_idle_is_a_no_op() {
        let (engine, viewport, _) = engine_at(120.0);

        assert!(!interrupt(&engine, "wheel"));
        assert_eq!(viewport.scroll_top(), 120.0);
        assert_eq!(viewport.writes(), 0);
    }
}
