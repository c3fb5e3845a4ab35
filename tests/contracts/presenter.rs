//! Presenter contracts: copy semantics and the transient indicator.

use std::time::{Duration, Instant};

use eastward::application::{ContentPresenter, ContentView, CopyOutcome, COPY_FEEDBACK};
use eastward::domain::entities::Node;
use eastward::domain::ports::MemoryClipboard;

/// CONTRACT: Copy with nothing selected is a no-op.
#[test]
fn contract_copy_without_selection_is_noop() {
    let mut presenter = ContentPresenter::new(MemoryClipboard::new());
    let now = Instant::now();

    assert_eq!(presenter.copy(None, now).unwrap(), CopyOutcome::NothingSelected);
    assert_eq!(presenter.clipboard().writes(), 0);
    assert!(!presenter.is_copied(now));
}

/// CONTRACT: Copying "hello" turns the indicator on immediately and off
/// after the fixed delay; the file content is unchanged.
#[test]
fn contract_copy_indicator_lifecycle() {
    let file = Node::file("f", "F.md", "hello");
    let mut presenter = ContentPresenter::new(MemoryClipboard::new());
    let now = Instant::now();

    presenter.copy(Some(&file), now).unwrap();

    assert_eq!(presenter.clipboard().contents(), Some("hello"));
    assert!(presenter.is_copied(now));
    assert!(!presenter.is_copied(now + COPY_FEEDBACK));
    assert_eq!(file.content(), Some("hello"));
}

/// CONTRACT: The clipboard receives the full content byte for byte.
#[test]
fn contract_copy_is_verbatim() {
    let body = "# T\n\n\tindented\r\nunicode — ✓\n";
    let file = Node::file("f", "F.md", body);
    let mut presenter = ContentPresenter::new(MemoryClipboard::new());

    presenter.copy(Some(&file), Instant::now()).unwrap();

    assert_eq!(presenter.clipboard().contents(), Some(body));
}

/// CONTRACT: The view reflects the indicator and shows content verbatim.
#[test]
fn contract_view_tracks_indicator() {
    let file = Node::file("f", "README.md", "readme");
    let mut presenter =
        ContentPresenter::with_feedback(MemoryClipboard::new(), Duration::from_millis(10));
    let now = Instant::now();
    presenter.copy(Some(&file), now).unwrap();

    let copied = |at| match presenter.view(Some(&file), at) {
        ContentView::File(view) => {
            assert_eq!(view.content, "readme");
            view.copied
        }
        ContentView::Placeholder => panic!("expected file view"),
    };

    assert!(copied(now));
    assert!(!copied(now + Duration::from_millis(10)));
}
