use crate::Result;
use crate::component::alert::unwrap_or_alert;
use crate::enrollment::state::SectionRow;
use crate::enrollment::with_state;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use crate::template::get_template;
use crate::utils::{
    add_class, append_child, clear_element, get_document, get_element_by_id,
    query_selector_all, query_selector_single_element, set_attribute,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlInputElement};

/// Paint the selection table from the wizard state: one row per section in
/// server order, or the single placeholder row when the term has nothing on
/// offer. Rows are replaced wholesale, so checkbox listeners are re-attached
/// on every render.
pub fn render_section_table(document: &Document) -> Result<()> {
    let table_body = get_element_by_id(document, "section-table-body")?;
    clear_element(&table_body);

    let rows = with_state(|state| state.section_rows());
    if rows.is_empty() {
        let empty_row = get_template(document, "empty-section-row-template")?;
        append_child(&table_body, &empty_row)?;
        return update_total_display(document);
    }

    for row in &rows {
        let row_element = create_section_row(document, row)?;
        append_child(&table_body, &row_element)?;
    }
    add_change_listeners(document)?;
    update_total_display(document)
}

fn create_section_row(document: &Document, row: &SectionRow) -> Result<Element> {
    let element = get_template(document, "section-row-template")?;
    query_selector_single_element(&element, ".subject-code")?
        .set_text_content(Some(&row.subject_code));
    query_selector_single_element(&element, ".subject-title")?
        .set_text_content(Some(&row.subject_title));
    query_selector_single_element(&element, ".section-name")?
        .set_text_content(Some(&row.section_name));
    query_selector_single_element(&element, ".units")?
        .set_text_content(Some(&row.units.to_string()));
    query_selector_single_element(&element, ".schedule")?.set_text_content(Some(&row.schedule));
    query_selector_single_element(&element, ".section-status")?
        .set_text_content(Some(&row.status_label));

    let checkbox = query_selector_single_element(&element, ".section-checkbox")?
        .dyn_into::<HtmlInputElement>()
        .map_err(Error::from)?;
    checkbox.set_value(&row.section_no.to_string());
    set_attribute(&checkbox, "data-units", &row.units.to_string())?;
    checkbox.set_checked(row.selected);
    checkbox.set_disabled(!row.selectable);
    if !row.selectable {
        add_class(&element, "section-closed")?;
    }

    Ok(element)
}

fn add_change_listeners(document: &Document) -> Result<()> {
    let table_body = get_element_by_id(document, "section-table-body")?;
    let checkboxes = query_selector_all(&table_body, ".section-checkbox")?;
    let closure = Closure::wrap(Box::new(|event: Event| {
        unwrap_or_alert(handle_checkbox_toggle(&event));
    }) as Box<dyn Fn(_)>);
    for checkbox in checkboxes {
        checkbox
            .add_event_listener_with_event_listener("change", closure.as_ref().unchecked_ref())
            .unwrap();
    }
    closure.forget();

    Ok(())
}

fn handle_checkbox_toggle(event: &Event) -> Result<()> {
    let document = get_document()?;
    let target = event
        .target()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "change event without a target"))?;
    let checkbox = target
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| Error::new(DEFAULT_ERROR_MESSAGE, "change event target is not a checkbox"))?;
    let section_no = checkbox
        .value()
        .parse::<u32>()
        .map_err(|error| Error::new(DEFAULT_ERROR_MESSAGE, &error.to_string()))?;

    with_state(|state| state.toggle(section_no, checkbox.checked()));
    update_total_display(&document)
}

/// The displayed total is recomputed from the checkboxes actually ticked in
/// the DOM; the wizard state must agree with it.
fn update_total_display(document: &Document) -> Result<()> {
    let total = sum_checked_units(document)?;
    let state_total = with_state(|state| state.total_units());
    if total != state_total {
        log::error!("Selection is out of sync [dom: {total}, state: {state_total}]");
    }
    get_element_by_id(document, "total-units-display")?
        .set_text_content(Some(&total.to_string()));

    Ok(())
}

fn sum_checked_units(document: &Document) -> Result<u32> {
    let table_body = get_element_by_id(document, "section-table-body")?;
    let checkboxes = query_selector_all(&table_body, ".section-checkbox")?;
    let mut total = 0;
    for checkbox in checkboxes {
        let checkbox = checkbox
            .dyn_into::<HtmlInputElement>()
            .map_err(Error::from)?;
        if checkbox.checked() {
            total += checkbox
                .get_attribute("data-units")
                .and_then(|units| units.parse::<u32>().ok())
                .unwrap_or(0);
        }
    }

    Ok(total)
}
