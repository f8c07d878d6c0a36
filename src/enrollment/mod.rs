use crate::enrollment::state::EnrollmentState;
use crate::utils::get_element_by_id;
use std::cell::RefCell;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

mod catalog;
mod confirm;
mod router;
pub mod state;
mod submit;
mod table;

thread_local! {
    static STATE: RefCell<EnrollmentState> = RefCell::new(EnrollmentState::default());
}

/// Run `action` against the wizard state. The event loop is single-threaded
/// and the borrow is never held across an await, so it cannot be reentrant.
pub(crate) fn with_state<T>(action: impl FnOnce(&mut EnrollmentState) -> T) -> T {
    STATE.with(|state| action(&mut state.borrow_mut()))
}

/// Wire up the enrollment wizard when its markup is present on the page.
pub fn init_enrollment_page(document: &Document) {
    if get_element_by_id(document, "step-1").is_err() {
        return;
    }
    spawn_local(async {
        router::route_from_url().await;
    });
}
