//! Integration tests for the async shell handle.

use gilt_nav::prelude::*;
use pretty_assertions::assert_eq;
use tokio_test::{assert_err, assert_ok};

fn shell() -> Shell {
    let mut shell = Shell::with_config(ShellConfig::default().with_request_buffer(4));
    shell
        .register_route("ContentPage", || ScreenDescriptor::new("ContentPage"))
        .unwrap();
    shell
        .register_route("ModalTestPage", || ScreenDescriptor::new("ModalTestPage").modal(true))
        .unwrap();
    shell
        .add_item(ShellItem::single(Some("NewRoute"), Some("Section"), Some("Content")))
        .unwrap();
    shell
}

#[tokio::test]
async fn go_to_resolves_to_location() {
    let handle = shell().spawn().unwrap();

    let location = assert_ok!(handle.go_to("ModalTestPage/ContentPage").await);
    assert_eq!(location.to_string(), "//NewRoute/Section/Content/ModalTestPage/ContentPage");
    assert_eq!(handle.current_location(), location);
}

#[tokio::test]
async fn concurrent_requests_are_serialized() {
    let handle = shell().spawn().unwrap();

    let (first, second, third) = tokio::join!(
        handle.go_to("ModalTestPage"),
        handle.go_to("ModalTestPage"),
        handle.go_to("ModalTestPage"),
    );
    assert_ok!(first);
    assert_ok!(second);
    assert_ok!(third);

    let shell = assert_ok!(handle.shutdown().await);
    assert_eq!(shell.modal_stack().map(|modal| modal.len()), Some(3));
    assert_eq!(
        shell.current_location().to_string(),
        "//NewRoute/Section/Content/ModalTestPage/ModalTestPage/ModalTestPage"
    );
}

#[tokio::test]
async fn errors_cross_the_channel() {
    let handle = shell().spawn().unwrap();

    let err = assert_err!(handle.go_to("Missing").await);
    assert_eq!(err, NavigationError::UnknownRoute { route: "Missing".into() });

    let err = assert_err!(handle.pop().await);
    assert_eq!(err, NavigationError::EmptyStackPop);

    assert_eq!(handle.current_location().to_string(), "//NewRoute/Section/Content");
}

#[tokio::test]
async fn pops_through_the_handle() {
    let handle = shell().spawn().unwrap();
    assert_ok!(handle.go_to("ContentPage/ModalTestPage/ContentPage").await);

    let location = assert_ok!(handle.pop_modal().await);
    assert_eq!(location.to_string(), "//NewRoute/Section/Content/ContentPage");

    let location = assert_ok!(handle.pop_to_root().await);
    assert_eq!(location.to_string(), "//NewRoute/Section/Content");
}

#[tokio::test]
async fn subscribers_observe_handle_navigation() {
    let handle = shell().spawn().unwrap();
    let mut receiver = handle.subscribe_location();

    assert_ok!(handle.go_to("ContentPage").await);
    assert_ok!(receiver.changed().await);
    assert_eq!(
        receiver.borrow().to_string(),
        "//NewRoute/Section/Content/ContentPage"
    );
}

#[test]
fn handle_works_on_a_blocking_runtime() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let location = runtime.block_on(async {
        let handle = shell().spawn().unwrap();
        handle.go_to("ContentPage").await
    });
    assert_eq!(
        assert_ok!(location).to_string(),
        "//NewRoute/Section/Content/ContentPage"
    );
}

#[test]
fn spawn_needs_a_runtime() {
    let err = assert_err!(shell().spawn());
    assert_eq!(err, NavigationError::NoRuntime);
}
