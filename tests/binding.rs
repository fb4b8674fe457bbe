#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;


use serde_wasm_bindgen::from_value;
use sineta::facades::wasm::notifications::{
    dismissal_targets, init_notifications, init_notifications_in,
};
use sineta::BindStats;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_init_binds_the_default_container() {
    let container = test_utils::render_notification_list(
        "notifications",
        &["/notifications/1/remove", "/notifications/2/remove"],
    );

    let stats: BindStats =
        from_value(init_notifications(None).expect("init")).expect("stats decode");

    assert_eq!(stats, BindStats { bound: 2, skipped: 0 });

    test_utils::remove_from_body(&container);
}

#[wasm_bindgen_test]
fn test_init_accepts_an_explicit_container_id() {
    let container =
        test_utils::render_notification_list("inbox-alerts", &["/notifications/5/remove"]);

    let stats: BindStats =
        from_value(init_notifications(Some("inbox-alerts".to_string())).expect("init"))
            .expect("stats decode");

    assert_eq!(stats, BindStats { bound: 1, skipped: 0 });

    test_utils::remove_from_body(&container);
}

#[wasm_bindgen_test]
fn test_init_without_the_container_is_a_noop() {
    let stats: BindStats = from_value(
        init_notifications(Some("not-on-this-page".to_string())).expect("init"),
    )
    .expect("stats decode");

    assert_eq!(stats, BindStats::default());
}

#[wasm_bindgen_test]
fn test_init_reports_skipped_controls() {
    let container = test_utils::render_notification_list("mixed-list", &["/notifications/1/remove"]);
    let document = test_utils::document();
    let bare_item = document.create_element("li").expect("create li");
    let bare_button = document.create_element("button").expect("create button");
    bare_item.append_child(&bare_button).expect("append button");
    container.append_child(&bare_item).expect("append item");

    let stats: BindStats =
        from_value(init_notifications_in(&container).expect("init")).expect("stats decode");

    assert_eq!(stats, BindStats { bound: 1, skipped: 1 });

    test_utils::remove_from_body(&container);
}

#[wasm_bindgen_test]
fn test_dismissal_targets_lists_wired_urls() {
    let container = test_utils::render_notification_list(
        "target-list",
        &["/notifications/1/remove", "/notifications/2/remove"],
    );
    let document = test_utils::document();
    let bare_item = document.create_element("li").expect("create li");
    let bare_button = document.create_element("button").expect("create button");
    bare_item.append_child(&bare_button).expect("append button");
    container.append_child(&bare_item).expect("append item");

    let targets: Vec<String> = from_value(
        dismissal_targets(Some("target-list".to_string())).expect("targets"),
    )
    .expect("targets decode");

    assert_eq!(
        targets,
        vec!["/notifications/1/remove", "/notifications/2/remove"]
    );

    test_utils::remove_from_body(&container);
}

#[wasm_bindgen_test]
fn test_dismissal_targets_without_the_container_is_empty() {
    let targets: Vec<String> = from_value(
        dismissal_targets(Some("absent-list".to_string())).expect("targets"),
    )
    .expect("targets decode");

    assert!(targets.is_empty());
}
