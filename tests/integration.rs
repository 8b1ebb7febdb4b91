// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios across the engine, content layout, and support
//! modules, driven the same way the application shell drives them: scroll
//! positions feed the observers, explicit ticks advance the animators.

use iced_vitrine::config::{self, Config};
use iced_vitrine::content::{self, ElementId, Group};
use iced_vitrine::diagnostics::{
    BufferCapacity, DiagnosticsCollector, UserAction, WarningEvent, WarningType,
};
use iced_vitrine::engine::counter::CounterAnimator;
use iced_vitrine::engine::reveal::RevealAnimator;
use iced_vitrine::engine::visibility::{Observer, ObserverOptions};
use iced_vitrine::engine::PageViewport;
use iced_vitrine::ui::notifications::{Kind, Manager};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const WINDOW_HEIGHT: f32 = 800.0;

fn registered_animator() -> RevealAnimator {
    let mut reveal = RevealAnimator::new();
    for group in content::REVEAL_GROUPS {
        reveal.register(
            &content::group_elements(group.group, group.count),
            group.kind,
            group.stagger,
        );
    }
    reveal
}

#[test]
fn scrolling_through_the_page_reveals_every_group() {
    let mut reveal = registered_animator();
    let now = Instant::now();

    // Walk the page top to bottom in half-window steps, the way a user
    // scrolling would produce viewport updates.
    let mut scroll_top = 0.0;
    let max_scroll = content::page_height() - WINDOW_HEIGHT;
    while scroll_top <= max_scroll {
        let viewport = PageViewport::new(scroll_top, WINDOW_HEIGHT);
        reveal.sweep(viewport, now);
        reveal.scan(viewport, now);
        scroll_top += WINDOW_HEIGHT / 2.0;
    }
    let bottom = PageViewport::new(max_scroll, WINDOW_HEIGHT);
    reveal.sweep(bottom, now);
    reveal.scan(bottom, now);

    for group in content::REVEAL_GROUPS {
        for index in 0..group.count {
            let id = ElementId::new(group.group, index);
            assert!(
                reveal.is_revealed(id),
                "{:?}[{index}] never revealed",
                group.group
            );
        }
    }
}

#[test]
fn elements_below_the_fold_stay_hidden_until_scrolled_to() {
    let mut reveal = registered_animator();
    let now = Instant::now();

    let top = PageViewport::new(0.0, WINDOW_HEIGHT);
    reveal.sweep(top, now);
    reveal.scan(top, now);

    // The contact form sits at the very bottom of the page.
    let form = ElementId::new(Group::ContactForm, 0);
    assert!(!reveal.is_revealed(form));

    let near_bottom = PageViewport::new(content::page_height() - WINDOW_HEIGHT, WINDOW_HEIGHT);
    reveal.sweep(near_bottom, now);
    reveal.scan(near_bottom, now);
    assert!(reveal.is_revealed(form));
}

#[test]
fn growing_the_viewport_reveals_elements_without_scrolling() {
    let mut reveal = registered_animator();
    let now = Instant::now();

    // A short window at the top of the page leaves the about text hidden.
    let short = PageViewport::new(0.0, WINDOW_HEIGHT);
    reveal.sweep(short, now);
    reveal.scan(short, now);
    let about = ElementId::new(Group::AboutText, 0);
    assert!(!reveal.is_revealed(about));

    // Enlarging the window exposes it at the same scroll offset.
    let tall = PageViewport::new(0.0, content::page_height());
    reveal.sweep(tall, now);
    reveal.scan(tall, now);
    assert!(reveal.is_revealed(about));
}

#[test]
fn stats_count_up_once_half_visible_and_stop_at_their_targets() {
    let mut observer = Observer::new(ObserverOptions {
        threshold: 0.5,
        bottom_margin: 0.0,
    });
    let stat_count = content::STATS.len() as u16;
    for (id, bounds) in content::group_elements(Group::StatNumber, stat_count) {
        observer.observe(id, bounds);
    }
    let mut counters = CounterAnimator::new();

    // Viewport over the stats band.
    let viewport = PageViewport::new(content::Section::Stats.top(), WINDOW_HEIGHT);
    for id in observer.sweep(viewport) {
        let (_, target) = content::STATS[usize::from(id.index)];
        counters.start(id, target);
    }
    assert!(!counters.is_idle());

    // The count runs for 2000 ms at a 16 ms tick.
    for _ in 0..125 {
        counters.tick();
    }
    assert!(counters.is_idle());
    for (index, (_, target)) in content::STATS.iter().enumerate() {
        let id = ElementId::new(Group::StatNumber, index as u16);
        let expected: u64 = target.parse().unwrap();
        assert_eq!(counters.display(id), Some(expected));
    }

    // A second pass over the same viewport must not restart anything.
    for id in observer.sweep(viewport) {
        let (_, target) = content::STATS[usize::from(id.index)];
        counters.start(id, target);
    }
    assert!(counters.is_idle());
}

#[test]
fn a_success_banner_lives_through_its_full_cycle() {
    let mut manager = Manager::new();
    let now = Instant::now();

    let id = manager.show("Thank you! We will be in touch shortly.", Kind::Success, now);
    assert_eq!(manager.active_count(), 1);

    // Auto-dismiss begins the slide-out at five seconds.
    manager.tick(now + Duration::from_millis(5000));
    assert_eq!(manager.active_count(), 1);

    // Gone after the 300 ms slide-out.
    manager.tick(now + Duration::from_millis(5300));
    assert_eq!(manager.active_count(), 0);

    // Dismissing the removed banner is a safe no-op.
    assert!(!manager.dismiss(id, now + Duration::from_millis(6000)));
}

#[test]
fn config_survives_a_save_and_load_round_trip() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let written = Config {
        reduced_motion: Some(true),
        loading_delay_ms: Some(500),
        window_size: Some([1440.0, 900.0]),
        diagnostics_capacity: Some(64),
    };
    config::save_to_path(&written, &path).expect("failed to write config");

    let read = config::load_from_path(&path).expect("failed to read config");
    assert_eq!(read.reduced_motion, Some(true));
    assert_eq!(read.loading_delay_ms, Some(500));
    assert_eq!(read.window_size, Some([1440.0, 900.0]));
    assert_eq!(read.diagnostics_capacity, Some(64));
}

#[test]
fn a_malformed_config_falls_back_with_a_warning() {
    let dir = tempdir().expect("failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "reduced_motion = {{{")
        .expect("failed to write broken config");

    let (config, warning) = config::load(dir.path().to_str());
    assert!(warning.is_some());
    assert!(!config.reduced_motion());
}

#[test]
fn diagnostics_flow_from_the_handle_into_the_export() {
    let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::new(32));

    handle.log_action(UserAction::FilterChange {
        filter: "Interior".to_owned(),
    });
    handle.log_warning(WarningEvent::new(
        WarningType::ResourceLoad,
        "portfolio thumbnail failed to load: assets/portfolio/harrow-loft.jpg",
    ));
    assert_eq!(collector.drain(), 2);

    let json = collector.export_json().expect("export failed");
    assert!(json.contains("filter_change"));
    assert!(json.contains("harrow-loft.jpg"));
}
