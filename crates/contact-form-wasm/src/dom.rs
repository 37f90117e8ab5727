//! DOM binding for the contact form
//!
//! Reads the live form, writes the error region, and wires the submit and
//! reset events. All decisions are made by `contact_form`; this module only
//! moves values in and out of the page.

use contact_form::{on_reset, on_submit, ErrorPanel, Field, FormValues, UiConfig, Validator};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("Window has no document"))
}

fn find_form(document: &Document, name: &str) -> Result<HtmlFormElement, JsValue> {
    document
        .forms()
        .named_item(name)
        .ok_or_else(|| JsValue::from_str(&format!("Form not found: {}", name)))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| JsValue::from_str(&format!("Not a form element: {}", name)))
}

/// Current text of an `<input>` or `<textarea>`
fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

/// Read the recognised fields; controls that are missing stay absent and
/// validate as empty
pub fn read_values(form: &HtmlFormElement) -> FormValues {
    let elements = form.elements();
    let mut values = FormValues::new();

    for field in Field::ALL {
        if let Some(value) = elements
            .named_item(field.key())
            .and_then(|element| control_value(&element))
        {
            values.set(field, value);
        }
    }

    values
}

/// Write `panel` into the region with id `region_id`
pub fn show_panel(
    document: &Document,
    region_id: &str,
    panel: &ErrorPanel,
    scroll_into_view: bool,
) -> Result<(), JsValue> {
    let region = document
        .get_element_by_id(region_id)
        .ok_or_else(|| JsValue::from_str(&format!("Error region not found: #{}", region_id)))?;

    // Markup comes from maud, so messages are already escaped
    region.set_inner_html(&panel.to_html());

    if let Some(element) = region.dyn_ref::<HtmlElement>() {
        element.style().set_property("display", panel.display_value())?;
    }

    if scroll_into_view && panel.is_visible() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        region.scroll_into_view_with_scroll_into_view_options(&options);
    }

    Ok(())
}

fn handle_submit(
    event: &Event,
    form: &HtmlFormElement,
    validator: &Validator,
    config: &UiConfig,
) -> Result<(), JsValue> {
    let values = read_values(form);
    let outcome = on_submit(validator, &values);

    // Block the submission before touching the region, so a broken region
    // can't let an invalid form through
    if outcome.should_prevent_default() {
        event.prevent_default();
    }

    show_panel(
        &document()?,
        &config.region_id,
        &outcome.panel,
        config.scroll_into_view,
    )
}

/// Clear the region once the browser has finished resetting the inputs
fn schedule_clear(config: &UiConfig) -> Result<(), JsValue> {
    let region_id = config.region_id.clone();
    let clear = Closure::once_into_js(move || {
        let cleared = document().and_then(|doc| show_panel(&doc, &region_id, &on_reset(), false));
        if let Err(err) = cleared {
            console::error_1(&err);
        }
    });

    let delay = i32::try_from(config.reset_delay().as_millis()).unwrap_or(i32::MAX);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(clear.unchecked_ref(), delay)?;
    Ok(())
}

/// Install the submit and reset handlers for the configured form
///
/// The reset handler hangs off the reset button when one matches
/// `reset_selector`, otherwise off the form's own `reset` event.
pub fn attach(validator: Validator, config: UiConfig) -> Result<(), JsValue> {
    let document = document()?;
    let form = find_form(&document, &config.form_name)?;
    let config = Rc::new(config);
    let validator = Rc::new(validator);

    let on_submit_event = {
        let form = form.clone();
        let config = Rc::clone(&config);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Err(err) = handle_submit(&event, &form, &validator, &config) {
                console::error_1(&err);
            }
        })
    };
    form.add_event_listener_with_callback("submit", on_submit_event.as_ref().unchecked_ref())?;
    on_submit_event.forget();

    let on_reset_event = {
        let config = Rc::clone(&config);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Err(err) = schedule_clear(&config) {
                console::error_1(&err);
            }
        })
    };
    match document.query_selector(&config.reset_selector)? {
        Some(button) => {
            button.add_event_listener_with_callback("click", on_reset_event.as_ref().unchecked_ref())?
        }
        None => {
            console::warn_1(&JsValue::from_str(&format!(
                "No reset button matches {}, listening for form reset instead",
                config.reset_selector
            )));
            form.add_event_listener_with_callback("reset", on_reset_event.as_ref().unchecked_ref())?
        }
    }
    on_reset_event.forget();

    Ok(())
}
