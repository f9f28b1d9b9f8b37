//! Integration tests for sticker
//!
//! Drives every behavior against the headless document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sticker::behavior::CHECK_INTERVAL;
use sticker::{BehaviorKind, Hook, HookEvent, Method, Options, Setting, Sticker};
use sticker_dom::{Document, LayoutBox, NodeId, WindowEvent};

fn page(width: f64, height: f64, body_height: f64) -> Document {
    let mut doc = Document::new(width, height);
    let body = doc.body();
    doc.set_layout(body, LayoutBox::new(0.0, body_height)).unwrap();
    doc
}

fn element(doc: &mut Document, parent: NodeId, tag: &str, top: f64, height: f64) -> NodeId {
    let id = doc.append_element(parent, tag).unwrap();
    doc.set_layout(id, LayoutBox::new(top, height)).unwrap();
    id
}

fn counter() -> (Rc<Cell<u32>>, impl Fn(&HookEvent) + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move |_: &HookEvent| inner.set(inner.get() + 1))
}

#[test]
fn test_element_is_bound_once() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let first = sticker.bind([header], &Options::new());
    let second = sticker.bind([header], &Options::of(BehaviorKind::Bottom));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(sticker.len(), 1);
    assert_eq!(sticker.host().query_selector_all(".sticker-wrapper").len(), 1);
    assert_eq!(sticker.instance_for(header).unwrap().kind(), BehaviorKind::Top);
}

#[test]
fn test_wrapper_structure() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);
    doc.set_attribute(header, "id", "masthead").unwrap();

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new()).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();
    let doc = sticker.host();

    assert_eq!(doc.tree().parent(header), Some(wrapper));
    assert_eq!(doc.tree().parent(wrapper), Some(body));
    assert_eq!(doc.get_element_by_id("masthead-sticker-wrapper"), Some(wrapper));
    assert!(doc.has_class(wrapper, "sticker-wrapper"));
    assert!(doc.has_class(wrapper, "sticker-enabled"));
    assert_eq!(doc.style(wrapper, "height").as_deref(), Some("60px"));
}

#[test]
fn test_destroy_restores_document() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    element(&mut doc, body, "p", 0.0, 100.0);
    let header = element(&mut doc, body, "header", 100.0, 60.0);
    element(&mut doc, body, "p", 160.0, 100.0);
    doc.set_attribute(header, "id", "masthead").unwrap();
    let index = doc.tree().child_index(header);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new().top_space(20.0)).unwrap();
    sticker.scroll_to(500.0);
    assert!(sticker.instance(id).unwrap().is_sticky());

    sticker.destroy(id);
    assert!(sticker.is_empty());

    let doc = sticker.host();
    assert_eq!(doc.tree().parent(header), Some(body));
    assert_eq!(doc.tree().child_index(header), index);
    assert_eq!(doc.attribute(header, "style"), None);
    assert_eq!(doc.get_element_by_id("masthead-sticker-wrapper"), None);
    let leftovers = doc
        .tree()
        .descendants(doc.tree().root())
        .into_iter()
        .filter_map(|n| doc.tree().element(n))
        .filter(|e| e.classes.has_prefixed("sticker-"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn test_top_threshold() {
    // E=100, T=20: stuck once S > 80
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new().top_space(20.0)).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();

    sticker.scroll_to(80.0);
    assert!(!sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(header, "position"), None);

    sticker.scroll_to(81.0);
    assert!(sticker.instance(id).unwrap().is_sticky());
    let doc = sticker.host();
    assert_eq!(doc.style(header, "position").as_deref(), Some("fixed"));
    assert_eq!(doc.style(header, "top").as_deref(), Some("20px"));
    assert!(doc.has_class(wrapper, "sticker-sticky"));

    sticker.scroll_to(0.0);
    assert!(!sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(header, "top"), None);
    assert!(!sticker.host().has_class(wrapper, "sticker-sticky"));
}

#[test]
fn test_top_space_clamped_to_element_offset() {
    // T=50 > E=30, so the effective space is 30 and any scroll sticks
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let nav = element(&mut doc, body, "nav", 30.0, 40.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(nav, &Options::new().top_space(50.0)).unwrap();
    assert!(!sticker.instance(id).unwrap().is_sticky());

    sticker.scroll_to(1.0);
    assert!(sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(nav, "top").as_deref(), Some("30px"));
}

#[test]
fn test_bottom_threshold() {
    // E=1000, EH=50, H=800: stuck while S < 250
    let mut doc = page(1024.0, 800.0, 3000.0);
    let body = doc.body();
    let bar = element(&mut doc, body, "div", 1000.0, 50.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(bar, &Options::of(BehaviorKind::Bottom)).unwrap();
    assert!(sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(bar, "bottom").as_deref(), Some("0px"));

    sticker.scroll_to(249.0);
    assert!(sticker.instance(id).unwrap().is_sticky());

    sticker.scroll_to(250.0);
    assert!(!sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(bar, "position"), None);
    assert_eq!(sticker.host().style(bar, "bottom"), None);
}

#[test]
fn test_bottom_follows_viewport_resize() {
    let mut doc = page(1024.0, 800.0, 3000.0);
    let body = doc.body();
    let bar = element(&mut doc, body, "div", 1000.0, 50.0);

    let (resizes, on_resize) = counter();
    let mut sticker = Sticker::new(doc);
    let id = sticker
        .bind_one(bar, &Options::of(BehaviorKind::Bottom).on(Hook::Resize, on_resize))
        .unwrap();

    sticker.scroll_to(300.0);
    assert!(!sticker.instance(id).unwrap().is_sticky());

    sticker.resize_to(1024.0, 700.0);
    assert_eq!(sticker.scheduler().viewport_height(), 700.0);
    assert!(sticker.instance(id).unwrap().is_sticky());
    assert_eq!(resizes.get(), 1);
}

#[test]
fn test_resize_refreshes_reserved_height() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new()).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();

    sticker
        .host_mut()
        .set_layout(header, LayoutBox::new(100.0, 90.0).with_padding(5.0, 5.0))
        .unwrap();
    sticker.resize_to(800.0, 768.0);
    assert_eq!(sticker.host().style(wrapper, "height").as_deref(), Some("100px"));
}

#[test]
fn test_disable_clears_styles() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new().top_space(20.0)).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();
    sticker.scroll_to(500.0);
    assert!(sticker.instance(id).unwrap().is_sticky());

    sticker.disable(id);
    let instance = sticker.instance(id).unwrap();
    assert!(!instance.is_enabled());
    assert!(!instance.is_sticky());

    let doc = sticker.host();
    assert_eq!(doc.style(header, "position"), None);
    assert_eq!(doc.style(header, "top"), None);
    assert_eq!(doc.style(wrapper, "height"), None);
    assert!(!doc.has_class(wrapper, "sticker-sticky"));
    assert!(!doc.has_class(wrapper, "sticker-enabled"));
    assert!(doc.has_class(wrapper, "sticker-wrapper"));
}

#[test]
fn test_disabled_instance_ignores_scroll() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let (scrolls, on_scroll) = counter();
    let mut sticker = Sticker::new(doc);
    let id = sticker
        .bind_one(header, &Options::new().on(Hook::Scroll, on_scroll))
        .unwrap();
    sticker.disable(id);

    sticker.scroll_to(500.0);
    sticker.update(id);
    assert!(!sticker.instance(id).unwrap().is_sticky());
    assert_eq!(scrolls.get(), 0);

    sticker.enable(id);
    assert!(sticker.instance(id).unwrap().is_sticky());
    sticker.scroll_to(600.0);
    assert_eq!(scrolls.get(), 1);
}

#[test]
fn test_hooks_fire_once_per_transition() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let (stuck, on_sticky) = counter();
    let (unstuck, on_unsticky) = counter();
    let mut sticker = Sticker::new(doc);
    let options = Options::new()
        .on(Hook::Sticky, on_sticky)
        .on(Hook::Unsticky, on_unsticky);
    sticker.bind_one(header, &options).unwrap();

    for y in [200.0, 300.0, 400.0] {
        sticker.scroll_to(y);
    }
    assert_eq!(stuck.get(), 1);
    assert_eq!(unstuck.get(), 0);

    sticker.scroll_to(0.0);
    sticker.scroll_to(10.0);
    assert_eq!(stuck.get(), 1);
    assert_eq!(unstuck.get(), 1);
}

#[test]
fn test_lifecycle_hook_order() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut options = Options::new();
    for hook in [Hook::Init, Hook::Enable, Hook::Disable, Hook::Destroy] {
        let log = Rc::clone(&log);
        options = options.on(hook, move |e: &HookEvent| log.borrow_mut().push(e.hook));
    }

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &options).unwrap();
    sticker.disable(id);
    sticker.enable(id);
    sticker.destroy(id);

    assert_eq!(
        *log.borrow(),
        vec![Hook::Init, Hook::Enable, Hook::Disable, Hook::Enable, Hook::Destroy]
    );
}

#[test]
fn test_sidebar_padding_is_bounded_by_container() {
    // CH=2000, CT=0, E=100, EH=300, T=0
    let mut doc = page(1024.0, 768.0, 5000.0);
    let body = doc.body();
    let container = element(&mut doc, body, "div", 0.0, 2000.0);
    let aside = element(&mut doc, container, "aside", 100.0, 300.0);

    let (stuck, on_sticky) = counter();
    let mut sticker = Sticker::new(doc);
    let id = sticker
        .bind_one(aside, &Options::of(BehaviorKind::Sidebar).on(Hook::Sticky, on_sticky))
        .unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();

    sticker.scroll_to(50.0);
    assert!(!sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(wrapper, "padding-top"), None);

    sticker.scroll_to(400.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("300px"));

    sticker.scroll_to(2000.0);
    assert!(sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("1600px"));
    assert_eq!(stuck.get(), 1);

    sticker.scroll_to(0.0);
    assert!(!sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(wrapper, "padding-top"), None);
}

#[test]
fn test_sidebar_explicit_container() {
    let mut doc = page(1024.0, 768.0, 5000.0);
    let body = doc.body();
    let column = element(&mut doc, body, "div", 0.0, 1000.0);
    let inner = element(&mut doc, column, "div", 0.0, 200.0);
    let aside = element(&mut doc, inner, "aside", 0.0, 100.0);

    let mut sticker = Sticker::new(doc);
    let options = Options::of(BehaviorKind::Sidebar).container(column);
    let id = sticker.bind_one(aside, &options).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();

    sticker.scroll_to(3000.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("900px"));

    sticker.disable(id);
    assert_eq!(sticker.host().style(wrapper, "padding-top"), None);
}

#[test]
fn test_sidebar_remeasures_container_on_resize() {
    let mut doc = page(1024.0, 768.0, 5000.0);
    let body = doc.body();
    let container = element(&mut doc, body, "div", 0.0, 2000.0);
    let aside = element(&mut doc, container, "aside", 100.0, 300.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(aside, &Options::of(BehaviorKind::Sidebar)).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();

    sticker.scroll_to(2000.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("1600px"));

    // Geometry is cached until the next resize
    sticker.host_mut().set_layout(container, LayoutBox::new(0.0, 1000.0)).unwrap();
    sticker.scroll_to(2100.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("1600px"));

    // 1000 - 300 + 0 - 100
    sticker.resize_to(1024.0, 768.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("600px"));
    assert!(sticker.instance(id).unwrap().is_sticky());
}

#[test]
fn test_sidebar_container_setting_applies_after_resize() {
    let mut doc = page(1024.0, 768.0, 5000.0);
    let body = doc.body();
    let column = element(&mut doc, body, "div", 0.0, 2000.0);
    let aside = element(&mut doc, column, "aside", 100.0, 300.0);
    let short = element(&mut doc, body, "div", 0.0, 800.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(aside, &Options::of(BehaviorKind::Sidebar)).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();
    sticker.scroll_to(2000.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("1600px"));

    sticker.set(id, Setting::Container(Some(short)));
    assert_eq!(sticker.instance(id).unwrap().settings().container, Some(short));
    sticker.scroll_to(2100.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("1600px"));

    // 800 - 300 + 0 - 100
    sticker.resize_to(1024.0, 768.0);
    assert_eq!(sticker.host().style(wrapper, "padding-top").as_deref(), Some("400px"));
}

#[test]
fn test_fill_short_page() {
    let mut doc = page(1024.0, 800.0, 500.0);
    let body = doc.body();
    let footer = element(&mut doc, body, "footer", 440.0, 60.0);

    let ticks = Rc::new(Cell::new(0));
    let seen = Rc::clone(&ticks);
    let mut sticker = Sticker::new(doc);
    let options = Options::of(BehaviorKind::Fill).callback(move |tick| {
        assert_eq!(tick.viewport_height, 800.0);
        seen.set(seen.get() + 1);
    });
    let id = sticker.bind_one(footer, &options).unwrap();

    assert!(sticker.instance(id).unwrap().is_sticky());
    let doc = sticker.host();
    assert_eq!(doc.style(footer, "position").as_deref(), Some("fixed"));
    assert_eq!(doc.style(footer, "bottom").as_deref(), Some("0px"));
    assert_eq!(doc.window().active_intervals(), 1);

    // The callback runs on every evaluation, not only on transitions
    for _ in 0..3 {
        sticker.scroll_to(0.0);
    }
    assert_eq!(ticks.get(), 4);
}

#[test]
fn test_fill_polls_document_height() {
    let mut doc = page(1024.0, 800.0, 500.0);
    let body = doc.body();
    let footer = element(&mut doc, body, "footer", 440.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(footer, &Options::of(BehaviorKind::Fill)).unwrap();
    assert!(sticker.instance(id).unwrap().is_sticky());

    // Content grows without any scroll or resize
    sticker.host_mut().set_layout(body, LayoutBox::new(0.0, 2000.0)).unwrap();
    sticker.advance(CHECK_INTERVAL);
    assert!(!sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(footer, "position"), None);

    sticker.disable(id);
    assert_eq!(sticker.host().window().active_intervals(), 0);
}

#[test]
fn test_fill_without_check_has_no_timer() {
    let mut doc = page(1024.0, 800.0, 500.0);
    let body = doc.body();
    let footer = element(&mut doc, body, "footer", 440.0, 60.0);

    let mut sticker = Sticker::new(doc);
    sticker
        .bind_one(footer, &Options::of(BehaviorKind::Fill).check(false))
        .unwrap();
    assert_eq!(sticker.host().window().active_intervals(), 0);
}

#[test]
fn test_fill_adjust_height() {
    let mut doc = page(1024.0, 800.0, 500.0);
    let body = doc.body();
    let footer = element(&mut doc, body, "footer", 440.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let options = Options::of(BehaviorKind::Fill).adjust_height(|height, _| height + 1000.0);
    let id = sticker.bind_one(footer, &options).unwrap();
    assert!(!sticker.instance(id).unwrap().is_sticky());
}

#[test]
fn test_fill_reenable_replaces_timer() {
    let mut doc = page(1024.0, 800.0, 500.0);
    let body = doc.body();
    let footer = element(&mut doc, body, "footer", 440.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(footer, &Options::of(BehaviorKind::Fill)).unwrap();
    sticker.enable(id);
    sticker.enable(id);
    assert_eq!(sticker.host().window().active_intervals(), 1);

    sticker.destroy(id);
    assert_eq!(sticker.host().window().active_intervals(), 0);
}

#[test]
fn test_subscription_follows_instances() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let a = element(&mut doc, body, "header", 0.0, 50.0);
    let b = element(&mut doc, body, "nav", 50.0, 50.0);

    let mut sticker = Sticker::new(doc);
    assert!(!sticker.is_listening());
    assert!(!sticker.host().window().has_listener(WindowEvent::Scroll));

    let ids = sticker.bind([a, b], &Options::new());
    assert!(sticker.is_listening());
    assert!(sticker.host().window().has_listener(WindowEvent::Scroll));
    assert!(sticker.host().window().has_listener(WindowEvent::Resize));

    sticker.destroy(ids[0]);
    assert!(sticker.is_listening());

    sticker.destroy(ids[1]);
    assert!(!sticker.is_listening());
    assert!(!sticker.host().window().has_listener(WindowEvent::Scroll));
    assert!(!sticker.host().window().has_listener(WindowEvent::Resize));

    sticker.bind_one(a, &Options::new()).unwrap();
    assert!(sticker.is_listening());
}

#[test]
fn test_instances_run_in_registration_order() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let a = element(&mut doc, body, "header", 0.0, 50.0);
    let b = element(&mut doc, body, "nav", 50.0, 50.0);

    let order = Rc::new(RefCell::new(Vec::new()));
    let mut sticker = Sticker::new(doc);
    let mut ids = Vec::new();
    for node in [a, b] {
        let order = Rc::clone(&order);
        let options = Options::new().on(Hook::Scroll, move |e: &HookEvent| order.borrow_mut().push(e.id));
        ids.push(sticker.bind_one(node, &options).unwrap());
    }

    sticker.scroll_to(10.0);
    assert_eq!(*order.borrow(), ids);
}

#[test]
fn test_invoke_skips_unbound_elements() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);
    let loose = element(&mut doc, body, "p", 200.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new()).unwrap();

    sticker.invoke([header, loose], Method::Disable);
    assert!(!sticker.instance(id).unwrap().is_enabled());
    assert!(sticker.instance_for(loose).is_none());
    assert_eq!(sticker.host().tree().parent(loose), Some(body));

    sticker.invoke([header], Method::Enable);
    assert!(sticker.instance(id).unwrap().is_enabled());
}

#[test]
fn test_invoke_set_then_update() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new()).unwrap();
    sticker.host_mut().scroll_to(90.0);

    sticker.invoke([header], Method::Set(Setting::TopSpace(20.0)));
    assert!(!sticker.instance(id).unwrap().is_sticky());

    sticker.invoke([header], Method::Update);
    assert!(sticker.instance(id).unwrap().is_sticky());
    assert_eq!(sticker.host().style(header, "top").as_deref(), Some("20px"));
}

#[test]
fn test_invoke_on_and_off() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let mut sticker = Sticker::new(doc);
    sticker.bind_one(header, &Options::new()).unwrap();

    let (scrolls, on_scroll) = counter();
    sticker.invoke([header], Method::On(Hook::Scroll, Rc::new(on_scroll)));
    sticker.scroll_to(10.0);
    assert_eq!(scrolls.get(), 1);

    sticker.invoke([header], Method::Off(Hook::Scroll));
    sticker.scroll_to(20.0);
    assert_eq!(scrolls.get(), 1);
}

#[test]
fn test_destroy_skips_disable_hook() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let (disables, on_disable) = counter();
    let (destroys, on_destroy) = counter();
    let mut sticker = Sticker::new(doc);
    let options = Options::new()
        .on(Hook::Disable, on_disable)
        .on(Hook::Destroy, on_destroy);
    sticker.bind_one(header, &options).unwrap();

    sticker.invoke([header], Method::Destroy);
    assert_eq!(disables.get(), 0);
    assert_eq!(destroys.get(), 1);
    assert!(sticker.instance_for(header).is_none());

    // Rebinding after destroy is allowed
    assert!(sticker.bind_one(header, &Options::new()).is_some());
}

#[test]
fn test_destroy_hook_fires_after_teardown() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let events = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&events);
    let mut sticker = Sticker::new(doc);
    let options = Options::new().on(Hook::Destroy, move |e: &HookEvent| seen.borrow_mut().push(*e));
    let id = sticker.bind_one(header, &options).unwrap();
    sticker.scroll_to(500.0);
    assert!(sticker.instance(id).unwrap().is_sticky());

    sticker.destroy(id);
    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert!(!events[0].enabled);
    assert!(!events[0].sticky);
    assert!(!sticker.is_listening());
    assert_eq!(sticker.host().tree().parent(header), Some(body));
    assert_eq!(sticker.host().style(header, "position"), None);
}

#[test]
fn test_custom_namespace() {
    let mut doc = page(1024.0, 768.0, 3000.0);
    let body = doc.body();
    let header = element(&mut doc, body, "header", 100.0, 60.0);

    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(header, &Options::new().namespace("pin")).unwrap();
    let wrapper = sticker.instance(id).unwrap().wrapper();
    sticker.scroll_to(500.0);

    let doc = sticker.host();
    assert!(doc.has_class(wrapper, "pin-wrapper"));
    assert!(doc.has_class(wrapper, "pin-enabled"));
    assert!(doc.has_class(wrapper, "pin-sticky"));
    assert!(!doc.has_class(wrapper, "sticker-wrapper"));
}

#[test]
fn test_options_from_json() {
    let mut doc = page(1024.0, 800.0, 3000.0);
    let body = doc.body();
    let bar = element(&mut doc, body, "div", 1000.0, 50.0);

    let options = Options::from_json(r#"{"type": "bottom", "bottomSpace": 10}"#).unwrap();
    let mut sticker = Sticker::new(doc);
    let id = sticker.bind_one(bar, &options).unwrap();

    assert_eq!(sticker.instance(id).unwrap().kind(), BehaviorKind::Bottom);
    assert_eq!(sticker.host().style(bar, "bottom").as_deref(), Some("10px"));
}
