//! Integration test: drive a controller loaded from a catalog file through
//! the scroll feed the way a presentation layer would, and check the
//! snapshots and view models it exposes.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::contact::ContactField;
use folio_core::signal::bind_controller;
use folio_core::views::{modal_view, nav_items, project_cards};
use folio_core::{
    ContactError, ContactForm, LayoutSource, ScrollFeed, SectionLayout, SiteCatalog,
    ViewStateController,
};
use folio_protocol::{Extent, SectionId, ViewCommand};
use pretty_assertions::assert_eq;

fn load() -> SiteCatalog {
    let data = include_bytes!("fixtures/compact-catalog.json");
    SiteCatalog::from_json(data).expect("fixture catalog should parse")
}

/// home[0,600) about[600,1000) projects[1000,1800) contact[1800,2300)
fn layout(catalog: &SiteCatalog) -> SectionLayout {
    SectionLayout::stacked(catalog.sections.ids().zip([600.0, 400.0, 800.0, 500.0]))
}

fn active(controller: &Rc<RefCell<ViewStateController>>) -> Option<String> {
    controller
        .borrow()
        .active_section()
        .map(ToString::to_string)
}

/// Carry out commands the way a host would: scrolling emits on the feed.
fn apply(commands: &[ViewCommand], feed: &ScrollFeed, layout: &SectionLayout) -> Vec<String> {
    let mut shown = Vec::new();
    for command in commands {
        match command {
            ViewCommand::ScrollToSection { section } => {
                let extent = layout.extent(section).expect("section is laid out");
                feed.emit(extent.start);
            }
            ViewCommand::ShowAcknowledgement { message } => shown.push(message.clone()),
            ViewCommand::ResetContactForm => shown.push("<reset>".to_owned()),
        }
    }
    shown
}

#[test]
fn scrolling_through_the_page_highlights_each_section() {
    let catalog = load();
    let feed = ScrollFeed::new();
    let controller = Rc::new(RefCell::new(ViewStateController::from_catalog(&catalog)));
    let layout = Rc::new(RefCell::new(layout(&catalog)));
    let _subscription = bind_controller(&feed, Rc::clone(&controller), Rc::clone(&layout));

    let expectations = [
        (0.0, "home"),
        (499.0, "home"),
        (500.0, "about"),
        (899.0, "about"),
        (900.0, "projects"),
        (1_700.0, "contact"),
        (2_199.0, "contact"),
        // Past the end: nothing matches, contact stays.
        (9_000.0, "contact"),
    ];
    for (offset, expected) in expectations {
        feed.emit(offset);
        assert_eq!(active(&controller).as_deref(), Some(expected), "offset {offset}");
    }
}

#[test]
fn navigation_closes_menu_and_scroll_catches_up() {
    let catalog = load();
    let feed = ScrollFeed::new();
    let controller = Rc::new(RefCell::new(ViewStateController::from_catalog(&catalog)));
    let layout = Rc::new(RefCell::new(layout(&catalog)));
    let _subscription = bind_controller(&feed, Rc::clone(&controller), Rc::clone(&layout));

    assert!(controller.borrow_mut().toggle_menu());
    let command = controller
        .borrow_mut()
        .navigate("projects")
        .expect("projects is in the catalog");

    // Until the scroll lands, the old section is still reported.
    assert!(!controller.borrow().menu_open());
    assert_eq!(active(&controller).as_deref(), Some("home"));

    apply(&[command], &feed, &layout.borrow());
    assert_eq!(active(&controller).as_deref(), Some("projects"));

    let snapshot = controller.borrow().snapshot();
    let items = nav_items(&catalog.sections, &snapshot);
    let highlighted: Vec<&str> = items
        .iter()
        .filter(|i| i.active)
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(highlighted, ["Projects"]);
}

#[test]
fn unknown_navigation_target_is_rejected() {
    let catalog = load();
    let mut controller = ViewStateController::from_catalog(&catalog);
    // `skills` exists on the stock page but not in this catalog.
    assert!(controller.navigate("skills").is_err());
}

#[test]
fn project_modal_lifecycle() {
    let catalog = load();
    let mut controller = ViewStateController::from_catalog(&catalog);
    let cards = project_cards(&catalog.projects, &catalog.owner);
    assert_eq!(cards.len(), 2);

    controller
        .open_project_at(cards[0].index)
        .expect("card index comes from the catalog");
    let view = modal_view(controller.modal(), &catalog.owner).expect("modal is open");
    assert_eq!(view.title, "X");
    assert_eq!(view.tags, ["Rust", "WASM"]);
    assert_eq!(view.primary.label, "Request Code");
    assert_eq!(view.primary.href, "mailto:owner@example.com");

    // Opening another project replaces the first.
    controller
        .open_project_at(cards[1].index)
        .expect("card index comes from the catalog");
    let view = modal_view(controller.modal(), &catalog.owner).expect("modal is open");
    assert_eq!(view.title, "Y");
    assert_eq!(view.primary.label, "Live Demo");
    assert_eq!(view.repo.href, "https://example.com/owner");

    controller.close_modal();
    controller.close_modal();
    assert!(modal_view(controller.modal(), &catalog.owner).is_none());

    let json = serde_json::to_value(controller.snapshot()).expect("snapshot serializes");
    assert_eq!(json["modal"]["isOpen"], false);
    assert!(json["modal"]["project"].is_null());
}

#[test]
fn contact_form_round_trip() {
    let catalog = load();
    let controller = ViewStateController::from_catalog(&catalog);
    let feed = ScrollFeed::new();
    let layout = layout(&catalog);

    let mut form = ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: String::new(),
        message: "Hello".into(),
    };
    assert_eq!(
        form.validate(),
        Err(ContactError::MissingField(ContactField::Subject))
    );

    form.subject = "Work".into();
    let submission = form.validate().expect("all fields present");
    let shown = apply(&controller.submit_contact(&submission), &feed, &layout);
    assert_eq!(
        shown,
        [
            "Thank you for your message! I'll get back to you soon.",
            "<reset>"
        ]
    );
}

#[test]
fn measured_extents_may_arrive_late() {
    let catalog = load();
    let mut controller = ViewStateController::from_catalog(&catalog);
    let mut layout = SectionLayout::new();

    // Only `contact` is mounted so far.
    layout.set(SectionId::from("contact"), Extent::new(1_800.0, 500.0));
    assert!(!controller.on_scroll(700.0, &layout));
    assert!(controller.on_scroll(1_800.0, &layout));
    assert_eq!(controller.active_section().map(SectionId::as_str), Some("contact"));

    // The rest mounts; the next signal uses the new measurements.
    let full = self::layout(&catalog);
    assert!(controller.on_scroll(700.0, &full));
    assert_eq!(controller.active_section().map(SectionId::as_str), Some("about"));
}

#[test]
fn catalog_lookahead_moves_the_switch_point() {
    let data = include_bytes!("fixtures/tall-header-catalog.json");
    let catalog = SiteCatalog::from_json(data).expect("fixture catalog should parse");
    assert_eq!(catalog.lookahead, 250.0);

    let feed = ScrollFeed::new();
    let controller = Rc::new(RefCell::new(ViewStateController::from_catalog(&catalog)));
    let layout = Rc::new(RefCell::new(layout(&catalog)));
    let _subscription = bind_controller(&feed, Rc::clone(&controller), Rc::clone(&layout));
    assert_eq!(controller.borrow().lookahead(), 250.0);

    // about starts at 600: with a 250px header it takes over at offset 350.
    let expectations = [
        (349.0, "home"),
        (350.0, "about"),
        (749.0, "about"),
        (750.0, "projects"),
        (1_550.0, "contact"),
    ];
    for (offset, expected) in expectations {
        feed.emit(offset);
        assert_eq!(active(&controller).as_deref(), Some(expected), "offset {offset}");
    }
}
