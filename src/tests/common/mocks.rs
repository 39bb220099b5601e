use std::cell::{ Cell, RefCell };
use chrono::{ Datelike, NaiveDate };
use crate::dom::DomGateway;
use crate::error::PageError;
use crate::utils::Clock;

#[derive(Debug, Clone)]
pub struct MockElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
}

/// In-memory document. Elements are addressed by insertion index and only
/// `.class` selectors are understood.
#[allow(dead_code)]
pub struct MockDom {
    elements: RefCell<Vec<MockElement>>,
    body: Option<usize>,
    pub opened: RefCell<Vec<(String, String)>>,
    pub block_popups: bool,
    mutations: Cell<usize>,
}

#[allow(dead_code)]
impl MockDom {
    pub fn new() -> Self {
        let mut dom = Self::without_body();
        dom.body = Some(dom.add("body", None, &[]));
        dom
    }

    pub fn without_body() -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            body: None,
            opened: RefCell::new(Vec::new()),
            block_popups: false,
            mutations: Cell::new(0),
        }
    }

    /// Body, navbar, `cards` cards, `headers` card headers, a footer holding
    /// `#year`, plus an unrelated `.content` div.
    pub fn landing_page(cards: usize, headers: usize) -> Self {
        let mut dom = Self::new();
        dom.add("nav", None, &["navbar"]);
        for _ in 0..cards {
            dom.add("div", None, &["card"]);
        }
        for _ in 0..headers {
            dom.add("div", None, &["card-header"]);
        }
        dom.add("div", None, &["content"]);
        dom.add("footer", None, &["footer"]);
        dom.add("span", Some("year"), &[]);
        dom
    }

    pub fn add(&mut self, tag: &str, id: Option<&str>, classes: &[&str]) -> usize {
        let mut elements = self.elements.borrow_mut();
        elements.push(MockElement {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: String::new(),
        });
        elements.len() - 1
    }

    pub fn element(&self, index: usize) -> MockElement {
        self.elements.borrow()[index].clone()
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Indexes of every element currently carrying `class`.
    pub fn carrying(&self, class: &str) -> Vec<usize> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, el)| el.classes.iter().any(|c| c == class))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    fn matches(element: &MockElement, selector: &str) -> Result<bool, PageError> {
        let class = selector
            .strip_prefix('.')
            .filter(|c| !c.is_empty())
            .ok_or_else(|| PageError::Host(format!("unsupported selector: {}", selector)))?;
        Ok(element.classes.iter().any(|c| c == class))
    }
}

impl DomGateway for MockDom {
    type Element = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.elements.borrow().iter().position(|el| el.id.as_deref() == Some(id))
    }

    fn query_one(&self, selector: &str) -> Result<Option<usize>, PageError> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<usize>, PageError> {
        let mut found = Vec::new();
        for (i, el) in self.elements.borrow().iter().enumerate() {
            if Self::matches(el, selector)? {
                found.push(i);
            }
        }
        Ok(found)
    }

    fn body(&self) -> Option<usize> {
        self.body
    }

    fn set_text(&self, element: &usize, text: &str) {
        self.elements.borrow_mut()[*element].text = text.to_string();
        self.mutations.set(self.mutations.get() + 1);
    }

    fn has_class(&self, element: &usize, class: &str) -> bool {
        self.elements.borrow()[*element].classes.iter().any(|c| c == class)
    }

    fn toggle_class(&self, element: &usize, class: &str) -> Result<bool, PageError> {
        if class.is_empty() || class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(PageError::Host(format!("invalid token: {:?}", class)));
        }

        let mut elements = self.elements.borrow_mut();
        let classes = &mut elements[*element].classes;
        self.mutations.set(self.mutations.get() + 1);
        match classes.iter().position(|c| c == class) {
            Some(pos) => {
                classes.remove(pos);
                Ok(false)
            }
            None => {
                classes.push(class.to_string());
                Ok(true)
            }
        }
    }

    fn open(&self, url: &str, target: &str) -> Result<bool, PageError> {
        self.opened.borrow_mut().push((url.to_string(), target.to_string()));
        Ok(!self.block_popups)
    }
}

#[allow(dead_code)]
pub struct FixedClock(pub NaiveDate);

#[allow(dead_code)]
impl FixedClock {
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0.year()
    }
}
