//! Sticker Demo - headless walkthrough of the demo page
//!
//! Builds the page, binds a header, a heading, a sidebar and a footer,
//! then scrolls, lets the clock run and crosses the mobile breakpoint.
//!
//! Run with `RUST_LOG=sticker=debug` to watch every transition.

use std::time::Duration;

use anyhow::Context;
use sticker::{BehaviorKind, Hook, HookEvent, Method, Options, Sticker, TimerId};
use sticker_dom::{Document, LayoutBox, NodeId};
use tracing_subscriber::EnvFilter;

/// Below this width every instance is disabled
const BREAKPOINT: f64 = 768.0;

/// Clock step when running timers
const TICK: Duration = Duration::from_millis(250);

/// Delay before the late content arrives
const LATE_CONTENT: Duration = Duration::from_secs(5);

struct Page {
    doc: Document,
    header: NodeId,
    heading: NodeId,
    sidebar: NodeId,
    footer: NodeId,
}

fn block(doc: &mut Document, parent: NodeId, tag: &str, top: f64, height: f64) -> anyhow::Result<NodeId> {
    let id = doc.append_element(parent, tag)?;
    doc.set_layout(id, LayoutBox::new(top, height))?;
    Ok(id)
}

/// The page starts shorter than the viewport so the footer fills
fn build_page() -> anyhow::Result<Page> {
    let mut doc = Document::new(1280.0, 768.0);
    let body = doc.body();
    doc.set_layout(body, LayoutBox::new(0.0, 700.0))?;

    let header = block(&mut doc, body, "header", 0.0, 80.0)?;
    doc.set_attribute(header, "id", "header")?;
    let heading = block(&mut doc, body, "h1", 100.0, 40.0)?;

    let content = block(&mut doc, body, "div", 160.0, 1600.0)?;
    doc.set_attribute(content, "class", "content")?;
    block(&mut doc, content, "p", 160.0, 400.0)?;
    let sidebar = block(&mut doc, content, "aside", 160.0, 300.0)?;
    doc.set_attribute(sidebar, "class", "sidebar")?;

    let footer = block(&mut doc, body, "footer", 620.0, 80.0)?;

    Ok(Page {
        doc,
        header,
        heading,
        sidebar,
        footer,
    })
}

fn log_hook(event: &HookEvent) {
    tracing::info!(id = %event.id, hook = event.hook.name(), sticky = event.sticky, "hook");
}

fn logged<N>(options: Options<N>) -> Options<N> {
    [Hook::Sticky, Hook::Unsticky, Hook::Enable, Hook::Disable]
        .into_iter()
        .fold(options, |options, hook| options.on(hook, log_hook))
}

/// Run the clock, delivering our own timer and the engine's separately
fn run_clock(sticker: &mut Sticker<Document>, duration: Duration, late: u64, body: NodeId) -> anyhow::Result<()> {
    let mut elapsed = Duration::ZERO;
    while elapsed < duration {
        elapsed += TICK;
        let fired = sticker.host_mut().window_mut().advance(TICK);
        for handle in fired {
            if handle.0 == late {
                tracing::info!("late content arrived");
                sticker.host_mut().set_layout(body, LayoutBox::new(0.0, 2400.0))?;
                sticker.host_mut().window_mut().clear_interval(handle);
            } else {
                sticker.fire_timer(TimerId(handle.0));
            }
        }
    }
    Ok(())
}

fn report(sticker: &Sticker<Document>) {
    for instance in sticker.scheduler().iter() {
        tracing::info!(
            id = %instance.id(),
            kind = %instance.kind(),
            enabled = instance.is_enabled(),
            sticky = instance.is_sticky(),
            "state"
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(version = sticker::VERSION, "sticker demo");

    let page = build_page()?;
    let body = page.doc.body();
    let mut sticker = Sticker::new(page.doc);

    sticker
        .bind_one(page.header, &logged(Options::of(BehaviorKind::Top)))
        .context("header could not be bound")?;
    sticker
        .bind_one(page.heading, &logged(Options::new().top_space(20.0)))
        .context("heading could not be bound")?;
    let sidebar_options = Options::from_json(r#"{"type": "sidebar", "topSpace": 30}"#)?;
    sticker
        .bind_one(page.sidebar, &logged(sidebar_options))
        .context("sidebar could not be bound")?;
    sticker
        .bind_one(page.footer, &logged(Options::of(BehaviorKind::Fill)))
        .context("footer could not be bound")?;
    report(&sticker);

    let late = sticker.host_mut().window_mut().set_interval(LATE_CONTENT);
    run_clock(&mut sticker, Duration::from_secs(6), late.0, body)?;

    for y in [150.0, 400.0, 900.0, 1500.0, 0.0] {
        tracing::info!(scroll_top = y, "scroll");
        sticker.scroll_to(y);
    }
    report(&sticker);

    let bound = [page.header, page.heading, page.sidebar, page.footer];
    let mut narrow = false;
    for width in [1280.0, 600.0, 1024.0] {
        sticker.resize_to(width, 768.0);
        let matches = width < BREAKPOINT;
        if matches != narrow {
            narrow = matches;
            let method = if matches { Method::Disable } else { Method::Enable };
            tracing::info!(width, narrow, "breakpoint");
            sticker.invoke(bound.iter().copied(), method);
        }
    }
    report(&sticker);

    let all: Vec<NodeId> = sticker.scheduler().iter().map(|i| i.element()).collect();
    sticker.invoke(all, Method::Destroy);
    tracing::info!(listening = sticker.is_listening(), "all destroyed");

    Ok(())
}
