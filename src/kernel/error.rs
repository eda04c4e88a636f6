use std::cell::RefCell;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub(super) fn set(message: impl Into<String>) {
    let message = message.into();
    LAST_ERROR.with(|last| *last.borrow_mut() = Some(message));
}

pub(super) fn take() -> Option<String> {
    LAST_ERROR.with(|last| last.borrow_mut().take())
}
