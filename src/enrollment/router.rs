use crate::Result;
use crate::component::alert::{unwrap_or_alert, unwrap_without_alert};
use crate::enrollment::catalog;
use crate::user_interface::with_loading;
use crate::utils::{
    add_class, get_document, get_element_by_id, get_element_by_id_dyn, get_location, navigate_to,
    remove_class,
};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::js_sys::encode_uri_component;
use web_sys::{Document, HtmlSelectElement, UrlSearchParams};

/// Derive the active wizard step from the URL and reveal the matching page
/// region. Step 2 also fills the term header and fetches the offering.
pub async fn route_from_url() {
    with_loading(async || {
        let document = get_document()?;
        let params = query_params()?;

        // Any `step` value other than "2" falls back to the term-choice step.
        if params.get("step").as_deref() == Some("2") {
            hide_region(&document, "step-1")?;
            show_region(&document, "step-2")?;
            fill_term_header(&document, &params)?;
            catalog::fetch_enrollment_options(&document).await?;
        } else {
            show_region(&document, "step-1")?;
            hide_region(&document, "step-2")?;
        }

        Ok(())
    })
    .await;
}

fn query_params() -> Result<UrlSearchParams> {
    let search = get_location()?.search()?;
    Ok(UrlSearchParams::new_with_str(&search)?)
}

fn fill_term_header(document: &Document, params: &UrlSearchParams) -> Result<()> {
    // UrlSearchParams values come back URL-decoded already.
    if let Some(year) = params.get("year") {
        get_element_by_id(document, "display-year")?.set_text_content(Some(&year));
    }
    if let Some(sem) = params.get("sem") {
        get_element_by_id(document, "display-sem")?.set_text_content(Some(&sem));
    }

    Ok(())
}

pub(crate) fn show_region(document: &Document, id: &str) -> Result<()> {
    remove_class(&get_element_by_id(document, id)?, "hidden")
}

pub(crate) fn hide_region(document: &Document, id: &str) -> Result<()> {
    add_class(&get_element_by_id(document, id)?, "hidden")
}

/// Step 1 → step 2 is a full navigation: the wizard rebuilds everything from
/// the URL on the next load.
#[wasm_bindgen]
pub fn go_to_section_step() {
    let document = unwrap_without_alert(get_document());
    let year =
        unwrap_or_alert(get_element_by_id_dyn::<HtmlSelectElement>(&document, "school-year"))
            .value();
    let sem =
        unwrap_or_alert(get_element_by_id_dyn::<HtmlSelectElement>(&document, "semester")).value();
    let url = format!(
        "/enrollment?step=2&year={}&sem={}",
        String::from(encode_uri_component(&year)),
        String::from(encode_uri_component(&sem)),
    );
    unwrap_or_alert(navigate_to(&url));
}

/// Step 2 cancel discards all wizard state by navigating away.
#[wasm_bindgen]
pub fn cancel_section_step() {
    unwrap_or_alert(navigate_to("/enrollment"));
}
