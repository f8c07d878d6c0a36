use crate::Result;
use crate::component::alert::{AlertLevel, create_alert, unwrap_or_alert, unwrap_without_alert};
use crate::enrollment::router::{hide_region, show_region};
use crate::enrollment::with_state;
use crate::template::get_template;
use crate::utils::{
    append_child, clear_element, get_document, get_element_by_id, query_selector_single_element,
};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;
use web_sys::js_sys::Date;

/// Step 2 → step 3 stays in-page and keeps the selection. It is refused
/// outright while nothing is ticked.
#[wasm_bindgen]
pub fn confirm_selection() {
    if !with_state(|state| state.has_selection()) {
        create_alert("Please select at least one subject.", AlertLevel::Error);
        return;
    }

    let document = unwrap_without_alert(get_document());
    unwrap_or_alert(hide_region(&document, "step-2"));
    unwrap_or_alert(show_region(&document, "step-3"));
    unwrap_or_alert(render_confirmation(&document));
}

/// Step 3 → step 2 keeps the selection as well.
#[wasm_bindgen]
pub fn cancel_confirmation() {
    let document = unwrap_without_alert(get_document());
    unwrap_or_alert(hide_region(&document, "step-3"));
    unwrap_or_alert(show_region(&document, "step-2"));
}

fn render_confirmation(document: &Document) -> Result<()> {
    let table_body = get_element_by_id(document, "confirmation-table-body")?;
    clear_element(&table_body);

    for row in &with_state(|state| state.confirmation_rows()) {
        let element = get_template(document, "confirmation-row-template")?;
        query_selector_single_element(&element, ".row-index")?
            .set_text_content(Some(&row.index.to_string()));
        query_selector_single_element(&element, ".subject-code")?
            .set_text_content(Some(&row.subject_code));
        query_selector_single_element(&element, ".subject-title")?
            .set_text_content(Some(&row.subject_title));
        query_selector_single_element(&element, ".units")?
            .set_text_content(Some(&row.units.to_string()));
        query_selector_single_element(&element, ".schedule")?.set_text_content(Some(&row.schedule));
        append_child(&table_body, &element)?;
    }

    let total = with_state(|state| state.total_units());
    get_element_by_id(document, "final-units")?.set_text_content(Some(&total.to_string()));
    stamp_registration_date(document)
}

/// Nominal registration date, stamped client-side at render time.
fn stamp_registration_date(document: &Document) -> Result<()> {
    let now = Date::new_0();
    let day = now.get_date();
    let month = now.get_month() + 1;
    let year = now.get_full_year();
    get_element_by_id(document, "registration-date")?
        .set_text_content(Some(&format!("{:02}/{:02}/{}", day, month, year)));

    Ok(())
}
