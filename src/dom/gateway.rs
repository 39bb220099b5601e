use crate::error::PageError;

/// Everything the page behaviors need from the host document.
///
/// Lookups that find nothing return `None` / an empty list, host exceptions
/// (invalid selectors, rejected tokens) come back as [`PageError`].
pub trait DomGateway {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element matching `selector`.
    fn query_one(&self, selector: &str) -> Result<Option<Self::Element>, PageError>;

    /// All elements matching `selector`, in document order, queried fresh on every call.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, PageError>;

    fn body(&self) -> Option<Self::Element>;

    fn set_text(&self, element: &Self::Element, text: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Flips `class` on the element and returns whether it is now present.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> Result<bool, PageError>;

    /// Asks the host to open `url` in the browsing context named `target`.
    /// `Ok(false)` means the host declined (e.g. a popup blocker).
    fn open(&self, url: &str, target: &str) -> Result<bool, PageError>;
}
