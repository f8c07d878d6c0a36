use crate::Result;
use crate::component::alert::unwrap_or_alert;
use crate::error::Error;
use crate::storage;
use crate::utils::{
    get_element_by_id, get_url_without_query, navigate_to, query_selector_single_element,
    set_attribute,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, HtmlAnchorElement};

/// Mark the nav link pointing at the current page for assistive tech.
pub fn init_navbar(document: &Document) {
    if get_element_by_id(document, "nav-list").is_err() {
        return;
    }
    unwrap_or_alert(mark_current_page_link(document));
}

fn mark_current_page_link(document: &Document) -> Result<()> {
    let url = get_url_without_query()?;
    let nav_list = get_element_by_id(document, "nav-list")?;
    let items = nav_list.children();
    for i in 0..items.length() {
        let item = items.get_with_index(i).ok_or_else(Error::default)?;
        let link_element = query_selector_single_element(&item, "a")?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(Error::from)?;
        if link_element.href() == url {
            set_attribute(&link_element, "aria-current", "page")?;
        }
    }

    Ok(())
}

/// Drop the stored session and go back to the login page.
#[wasm_bindgen]
pub fn logout() {
    unwrap_or_alert(storage::clear_session());
    unwrap_or_alert(navigate_to("/login"));
}
