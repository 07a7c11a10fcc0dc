use super::*;
use crate::fakes::{FakeEvents, FakePage, FakeScheduler};

fn cover() -> (Rc<FakePage>, Rc<FakeScheduler>, Rc<VideoCover<FakePage, FakeScheduler>>) {
    let page = Rc::new(FakePage::default());
    let scheduler = Rc::new(FakeScheduler::default());
    let cover = Rc::new(VideoCover::new(Rc::clone(&page), Rc::clone(&scheduler), &PageConfig::default()));
    (page, scheduler, cover)
}

#[test]
fn click_hides_cover() {
    let (page, _scheduler, cover) = cover();
    assert!(cover.on_click());
    assert!(page.cover_hidden.get());
}

#[test]
fn second_click_is_noop() {
    let (page, _scheduler, cover) = cover();
    cover.on_click();
    assert!(!cover.on_click());
    assert!(page.cover_hidden.get());
    assert_eq!(page.cover_hide_calls.get(), 1);
}

#[test]
fn frame_load_hides_after_delay() {
    let (page, scheduler, cover) = cover();
    cover.on_frame_loaded();
    assert!(!page.cover_hidden.get());

    assert_eq!(scheduler.fire_timers(), vec![1000]);
    assert!(page.cover_hidden.get());
}

#[test]
fn timer_after_click_does_not_hide_twice() {
    let (page, scheduler, cover) = cover();
    cover.on_frame_loaded();
    cover.on_click();
    scheduler.fire_timers();

    assert_eq!(page.cover_hide_calls.get(), 1);
}

#[test]
fn mounted_handlers_follow_events() {
    let (page, scheduler, cover) = cover();
    let events = FakeEvents::default();
    let _subs = cover.mount(&events);

    events.emit_trigger(Trigger::VideoFrameLoad);
    assert!(!page.cover_hidden.get());
    events.emit_trigger(Trigger::CoverClick);
    events.emit_trigger(Trigger::CoverClick);
    scheduler.fire_timers();

    assert!(page.cover_hidden.get());
    assert_eq!(page.cover_hide_calls.get(), 1);
}
