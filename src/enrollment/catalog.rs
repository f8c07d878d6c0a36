use crate::Result;
use crate::enrollment::{table, with_state};
use crate::utils::{get_element_by_id, get_element_by_id_dyn, remove_class};
use crate::{api, json};
use dto::enrollment_offering::EnrollmentOffering;
use web_sys::{Document, HtmlButtonElement};

/// Fetch the section offering for the active term and project it into the
/// wizard state and the selection table.
pub async fn fetch_enrollment_options(document: &Document) -> Result<()> {
    let body = api::request("/enrollment/options", "get", None).await?;
    let offering: EnrollmentOffering = json::from_str(&body)?;

    // An enrollment that is already official is presented read-only.
    let read_only = offering.enrollment_status().is_enrolled();
    if read_only {
        log::info!(
            "Enrollment is already official [term: {}]",
            offering.term_name()
        );
        disable_confirm_button(document)?;
        show_remarks(document, offering.remarks().as_deref())?;
    }

    with_state(|state| state.replace_sections(offering.sections().clone(), read_only));
    table::render_section_table(document)
}

fn disable_confirm_button(document: &Document) -> Result<()> {
    let button = get_element_by_id_dyn::<HtmlButtonElement>(document, "confirm-selection-button")?;
    button.set_disabled(true);
    Ok(())
}

fn show_remarks(document: &Document, remarks: Option<&str>) -> Result<()> {
    if let Some(remarks) = remarks {
        if let Ok(container) = get_element_by_id(document, "enrollment-remarks") {
            container.set_text_content(Some(remarks));
            remove_class(&container, "hidden")?;
        }
    }

    Ok(())
}
