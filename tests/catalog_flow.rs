//! End-to-end catalog flows driven through the public library API:
//! load → browse → filter/search → detail → variant selection → interest.

use vitrine::ui::CardMedia;
use vitrine::worker::{VitrineWorker, WorkerMessage, WorkerResponse};
use vitrine::{handle_event, initialize, Config, Event};

/// Loads a catalog into a fresh app state by driving the worker response
/// through the event handler, the same path the plugin runtime takes.
fn state_with_catalog(json: &str) -> vitrine::AppState {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, json).unwrap();

    let source = vitrine::storage::JsonCatalogSource::new(path);
    let mut worker = VitrineWorker::with_source(Box::new(source));
    let response = worker.handle_message(WorkerMessage::load_catalog(None));

    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    state
}

const TWO_PRODUCTS: &str = r#"[
    {
        "id": 1,
        "title": "Box",
        "category": "utilitarios",
        "price": 10,
        "currency": "BRL"
    },
    {
        "id": 2,
        "title": "Kit",
        "variants": [
            {"name": "Small", "price": 5},
            {"name": "Large", "price": 20}
        ]
    }
]"#;

#[test]
fn flat_priced_product_card_shows_plain_price() {
    let state = state_with_catalog(TWO_PRODUCTS);
    let vm = state.compute_viewmodel(24, 100);

    let card = &vm.cards[0];
    assert_eq!(card.title, "Box");
    assert_eq!(card.price.text, "R$ 10,00");
    assert!(!card.price.starting_from);
}

#[test]
fn variant_product_flows_from_starting_price_to_selection() {
    let mut state = state_with_catalog(TWO_PRODUCTS);

    // Card shows the minimum variant price as an "a partir de" bound.
    let vm = state.compute_viewmodel(24, 100);
    let card = &vm.cards[1];
    assert_eq!(card.price.text, "R$ 5,00");
    assert!(card.price.starting_from);

    // Opening the detail shows the first variant's price by default.
    handle_event(&mut state, &Event::KeyDown).unwrap();
    handle_event(&mut state, &Event::SelectProduct).unwrap();
    let vm = state.compute_viewmodel(24, 100);
    let detail = vm.detail.unwrap();
    assert_eq!(detail.price_text, "R$ 5,00");
    assert_eq!(detail.variants.len(), 2);
    assert!(detail.variants[0].is_selected);

    // Selecting the second variant updates only the displayed price.
    handle_event(&mut state, &Event::VariantKey('2')).unwrap();
    let vm = state.compute_viewmodel(24, 100);
    let detail = vm.detail.unwrap();
    assert_eq!(detail.price_text, "R$ 20,00");
    assert!(detail.variants[1].is_selected);

    // The underlying catalog never changed.
    assert_eq!(state.store.all()[1].variants[0].price, 5.0);
}

#[test]
fn search_term_selects_matching_products_only() {
    let mut state = state_with_catalog(TWO_PRODUCTS);

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "kit".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    let ids: Vec<i64> = state.store.view().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);

    // Clearing the term restores the full view.
    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.store.view().len(), 2);
}

#[test]
fn load_failure_yields_empty_catalog_and_a_notice() {
    let mut state = initialize(&Config::default());

    // Point the worker at a path that does not exist.
    let dir = tempfile::tempdir().unwrap();
    let source = vitrine::storage::JsonCatalogSource::new(dir.path().join("missing.json"));
    let mut worker = VitrineWorker::with_source(Box::new(source));
    let response = worker.handle_message(WorkerMessage::load_catalog(None));
    assert!(matches!(response, WorkerResponse::Error { .. }));

    let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

    assert!(state.store.all().is_empty());
    assert_eq!(actions.len(), 1);

    let vm = state.compute_viewmodel(24, 100);
    assert!(vm.cards.is_empty());
    assert_eq!(
        vm.notice.unwrap().text,
        "Não foi possível carregar os produtos."
    );
    assert!(vm.empty_state.is_some());
}

#[test]
fn adversarial_title_renders_as_literal_text() {
    let mut state = state_with_catalog(
        r#"[{"id": 9, "title": "<script>alert('x')</script>", "price": 1}]"#,
    );

    let vm = state.compute_viewmodel(24, 120);
    assert_eq!(vm.cards[0].title, "<script>alert('x')</script>");

    handle_event(&mut state, &Event::SelectProduct).unwrap();
    let vm = state.compute_viewmodel(24, 120);
    assert_eq!(vm.detail.unwrap().title, "<script>alert('x')</script>");
}

#[test]
fn control_bytes_in_fields_are_neutralized() {
    let mut state = state_with_catalog(
        r#"[{"id": 3, "title": "Vaso\u001b[2J", "description": "linha\nquebrada", "price": 1}]"#,
    );

    handle_event(&mut state, &Event::SelectProduct).unwrap();
    let vm = state.compute_viewmodel(24, 120);
    let detail = vm.detail.unwrap();
    assert_eq!(detail.title, "Vaso\u{fffd}[2J");
    assert_eq!(detail.description, "linha\u{fffd}quebrada");
}

#[test]
fn product_without_images_falls_back_to_title_glyph() {
    let state = state_with_catalog(r#"[{"id": 4, "title": "Vaso", "price": 1}, {"id": 5}]"#);
    let vm = state.compute_viewmodel(24, 100);

    assert_eq!(vm.cards[0].media, CardMedia::Glyph('V'));
    // Untitled products get the generic glyph.
    assert_eq!(vm.cards[1].media, CardMedia::Glyph('🧩'));
}

#[test]
fn gallery_appears_only_with_multiple_images() {
    let mut state = state_with_catalog(
        r#"[
            {"id": 1, "title": "Um", "images": ["solo.jpg"], "price": 1},
            {"id": 2, "title": "Dois", "images": ["a.jpg", "b.jpg"], "price": 1}
        ]"#,
    );

    handle_event(&mut state, &Event::SelectProduct).unwrap();
    let vm = state.compute_viewmodel(24, 100);
    let detail = vm.detail.unwrap();
    assert_eq!(detail.media, CardMedia::Image("solo.jpg".to_string()));
    assert!(detail.gallery.is_empty());
    handle_event(&mut state, &Event::CloseDetail).unwrap();

    handle_event(&mut state, &Event::KeyDown).unwrap();
    handle_event(&mut state, &Event::SelectProduct).unwrap();
    let vm = state.compute_viewmodel(24, 100);
    let detail = vm.detail.unwrap();
    assert_eq!(detail.gallery, vec!["a.jpg".to_string(), "b.jpg".to_string()]);

    // Cycling the preview swaps the main image without touching the product.
    handle_event(&mut state, &Event::CyclePreview).unwrap();
    let vm = state.compute_viewmodel(24, 100);
    assert_eq!(vm.detail.unwrap().media, CardMedia::Image("b.jpg".to_string()));
}

#[test]
fn missing_details_use_placeholder() {
    let mut state = state_with_catalog(r#"[{"id": 1, "title": "Caixa", "price": 1}]"#);
    handle_event(&mut state, &Event::SelectProduct).unwrap();
    let vm = state.compute_viewmodel(24, 100);
    assert_eq!(vm.detail.unwrap().details, "—");
}

#[test]
fn malformed_prices_never_fail_the_load() {
    let state = state_with_catalog(
        r#"[
            {"id": 1, "title": "Solto", "price": "caro"},
            {"id": 2, "title": "Par", "variants": [{"name": "A", "price": null}, {"name": "B", "price": "7"}]}
        ]"#,
    );

    let vm = state.compute_viewmodel(24, 100);
    assert_eq!(vm.cards[0].price.text, "R$ 0,00");
    // Coerced null counts as 0, so the minimum is 0.
    assert_eq!(vm.cards[1].price.text, "R$ 0,00");
    assert!(vm.cards[1].price.starting_from);
}
