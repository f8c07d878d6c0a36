use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Location, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "no global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "should have a document on window"))
}

pub fn get_body() -> Result<HtmlElement> {
    get_document()?
        .body()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "document does not have a body"))
}

pub fn get_location() -> Result<Location> {
    Ok(get_window()?.location())
}

pub fn navigate_to(url: &str) -> Result<()> {
    get_location()?.set_href(url)?;
    Ok(())
}

pub fn get_url_without_query() -> Result<String> {
    let location = get_location()?;
    Ok(format!("{}{}", location.origin()?, location.pathname()?))
}

pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, &format!("`{id}` element does not exist")))
}

pub fn get_element_by_id_dyn<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    get_element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(Error::from)
}

pub fn query_selector_single_element(parent: &Element, selector: &str) -> Result<Element> {
    parent.query_selector(selector)?.ok_or_else(|| {
        Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("`{selector}` did not match any element"),
        )
    })
}

pub fn query_selector_all(parent: &Element, selector: &str) -> Result<Vec<Element>> {
    let node_list = parent.query_selector_all(selector)?;
    let mut elements = vec![];
    for index in 0..node_list.length() {
        if let Some(node) = node_list.get(index) {
            elements.push(node.dyn_into::<Element>().map_err(Error::from)?);
        }
    }
    Ok(elements)
}

pub fn create_element(document: &Document, name: &str) -> Result<Element> {
    document
        .create_element(name)
        .map_err(|error| Error::from_parent("Can't create element", Error::from(error)))
}

pub fn append_child(container: &Element, child: &Element) -> Result<()> {
    container.append_child(child)?;
    Ok(())
}

pub fn clear_element(element: &Element) {
    element.set_inner_html("");
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    element.set_attribute(name, value)?;
    Ok(())
}

pub fn add_class(element: &Element, class: &str) -> Result<()> {
    element.class_list().add_1(class)?;
    Ok(())
}

pub fn remove_class(element: &Element, class: &str) -> Result<()> {
    element.class_list().remove_1(class)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_get_window() {
        get_window().unwrap();
    }

    #[wasm_bindgen_test]
    fn should_create_element_with_classes() {
        let document = get_document().unwrap();
        let element = create_element(&document, "div").unwrap();
        add_class(&element, "hidden").unwrap();
        assert!(element.class_list().contains("hidden"));
        remove_class(&element, "hidden").unwrap();
        assert!(!element.class_list().contains("hidden"));
    }
}
