use crate::element::{find_element, find_element_mut, Content, Element};
use crate::selector::{Selector, SelectorError};

/// An element tree with selector queries and id lookups.
///
/// Queries return element ids in document order. Mutation goes through
/// [`Document::get_mut`] so callers never hold borrows across a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Ids of all elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<String>, SelectorError> {
        let selector = Selector::parse(selector)?;
        let mut found = Vec::new();
        collect(&self.root, &mut Vec::new(), true, None, &selector, &mut found);
        Ok(found)
    }

    /// Id of the first element matching `selector`.
    pub fn query_selector(&self, selector: &str) -> Result<Option<String>, SelectorError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// Ids of descendants of `scope_id` matching `selector`.
    ///
    /// Like `Element.querySelectorAll`, the selector is matched against the
    /// whole tree, but only descendants of the scope are returned. An unknown
    /// scope yields an empty list.
    pub fn query_selector_all_within(
        &self,
        scope_id: &str,
        selector: &str,
    ) -> Result<Vec<String>, SelectorError> {
        let selector = Selector::parse(selector)?;
        let mut found = Vec::new();
        collect(
            &self.root,
            &mut Vec::new(),
            false,
            Some(scope_id),
            &selector,
            &mut found,
        );
        Ok(found)
    }

    pub fn query_selector_within(
        &self,
        scope_id: &str,
        selector: &str,
    ) -> Result<Option<String>, SelectorError> {
        Ok(self
            .query_selector_all_within(scope_id, selector)?
            .into_iter()
            .next())
    }

    /// Find the descendant of `scope_id` whose id is `id`.
    pub fn get_within(&self, scope_id: &str, id: &str) -> Option<&Element> {
        let scope = self.get(scope_id)?;
        scope
            .content
            .children()
            .iter()
            .find_map(|child| find_element(child, id))
    }

    pub fn get_within_mut(&mut self, scope_id: &str, id: &str) -> Option<&mut Element> {
        let scope = self.get_mut(scope_id)?;
        match &mut scope.content {
            Content::Children(children) => children
                .iter_mut()
                .find_map(|child| find_element_mut(child, id)),
            _ => None,
        }
    }

    /// Whether `id` names a descendant of `scope_id`.
    pub fn contains_within(&self, scope_id: &str, id: &str) -> bool {
        self.get_within(scope_id, id).is_some()
    }
}

fn collect<'a>(
    element: &'a Element,
    ancestors: &mut Vec<&'a Element>,
    in_scope: bool,
    scope_id: Option<&str>,
    selector: &Selector,
    found: &mut Vec<String>,
) {
    if in_scope && selector.matches(element, ancestors) {
        found.push(element.id.clone());
    }

    let children_in_scope = in_scope || scope_id == Some(element.id.as_str());
    ancestors.push(element);
    for child in element.content.children() {
        collect(child, ancestors, children_in_scope, scope_id, selector, found);
    }
    ancestors.pop();
}
