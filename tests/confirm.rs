mod common;

use common::{all_buttons, start, Close, EVERY_CLOSE};
use suspend_dialogs::host::headless::HeadlessHost;
use suspend_dialogs::{confirm, ButtonKind, Buttons, DialogAction};

#[tokio::test]
async fn confirm_tap_cancel_is_negative() {
    let host = HeadlessHost::new();
    let (dialog, task) = start(&host, {
        let host = host.clone();
        confirm(Buttons::new().positive("Save").negative("Cancel"), move || {
            host.builder().title("Title").message("Message")
        })
    })
    .await;

    assert_eq!(
        dialog.buttons(),
        vec![
            (ButtonKind::Positive, "Save".to_string()),
            (ButtonKind::Negative, "Cancel".to_string()),
        ]
    );
    assert!(dialog.click(ButtonKind::Negative));
    assert_eq!(task.await.unwrap().unwrap(), DialogAction::Negative);
}

#[tokio::test]
async fn confirm_reports_every_close_path() {
    for close in EVERY_CLOSE {
        let host = HeadlessHost::new();
        let (dialog, task) = start(&host, {
            let host = host.clone();
            confirm(all_buttons(), move || host.builder())
        })
        .await;

        assert!(close.apply(&dialog));
        let expected = match close {
            Close::Button(kind) => kind.action(),
            Close::OutsideTap | Close::Back => DialogAction::None,
        };
        assert_eq!(task.await.unwrap().unwrap(), expected, "{close:?}");
        assert_eq!(dialog.dismiss_fired(), 1);
    }
}

#[tokio::test]
async fn confirm_without_buttons_resolves_none() {
    let host = HeadlessHost::new();
    let (dialog, task) = start(&host, {
        let host = host.clone();
        confirm(Buttons::new(), move || host.builder())
    })
    .await;

    assert!(dialog.buttons().is_empty());
    assert!(!dialog.click(ButtonKind::Positive));
    assert!(dialog.press_back());
    assert_eq!(task.await.unwrap().unwrap(), DialogAction::None);
}
