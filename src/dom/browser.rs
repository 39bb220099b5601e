use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Window };
use crate::dom::DomGateway;
use crate::error::PageError;

/// [`DomGateway`] over the live browser document.
#[derive(Debug, Clone)]
pub struct BrowserGateway {
    window: Window,
    document: Document,
}

impl BrowserGateway {
    /// Gateway for the current global window. Outside wasm32 there is no
    /// window to bind to, so this always fails with [`PageError::NoWindow`].
    pub fn current() -> Result<Self, PageError> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or(PageError::NoWindow)?;
            let document = window.document().ok_or(PageError::NoDocument)?;
            Ok(Self { window, document })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(PageError::NoWindow)
        }
    }

    /// Runs `f` once the document structure is ready. If `DOMContentLoaded`
    /// already fired (module loaded late), `f` runs immediately.
    pub fn on_page_ready<F>(&self, f: F) -> Result<(), PageError> where F: FnOnce() + 'static {
        if self.document.ready_state() != "loading" {
            log::debug!("Document already parsed, running page-ready hook now");
            f();
            return Ok(());
        }

        let callback = wasm_bindgen::closure::Closure::once_into_js(f);
        self.document.add_event_listener_with_callback(
            "DOMContentLoaded",
            callback.unchecked_ref()
        )?;
        Ok(())
    }
}

impl DomGateway for BrowserGateway {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_one(&self, selector: &str) -> Result<Option<Element>, PageError> {
        Ok(self.document.query_selector(selector)?)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
        let nodes = self.document.query_selector_all(selector)?;
        let elements = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        Ok(elements)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn toggle_class(&self, element: &Element, class: &str) -> Result<bool, PageError> {
        Ok(element.class_list().toggle(class)?)
    }

    fn open(&self, url: &str, target: &str) -> Result<bool, PageError> {
        let opened = self.window.open_with_url_and_target(url, target)?;
        Ok(opened.is_some())
    }
}

/// Runs `f` against the live document, or fails when there is none.
pub fn with_browser<T, F>(f: F) -> Result<T, PageError>
    where F: FnOnce(&BrowserGateway) -> Result<T, PageError>
{
    let gateway = BrowserGateway::current()?;
    f(&gateway)
}
