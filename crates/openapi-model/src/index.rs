//! Operation index for id lookup and filter views

use std::collections::HashMap;

use crate::types::{ApiDocument, OperationDescriptor};

/// Indexes a normalized document's operations by id, with tag/method filter
/// views. Lookup is O(1); filters preserve declaration order.
pub struct OperationIndex<'a> {
    document: &'a ApiDocument,
    by_id: HashMap<&'a str, usize>,
}

impl<'a> OperationIndex<'a> {
    /// Build an index over a document's operations
    pub fn build(document: &'a ApiDocument) -> Self {
        let by_id = document
            .operations
            .iter()
            .enumerate()
            .map(|(i, op)| (op.operation_id.as_str(), i))
            .collect();

        Self { document, by_id }
    }

    /// Look up an operation by its id
    pub fn find_by_id(&self, operation_id: &str) -> Option<&'a OperationDescriptor> {
        self.by_id
            .get(operation_id)
            .map(|&i| &self.document.operations[i])
    }

    /// Filter operations by tag and/or method, AND-composed
    ///
    /// Tag matching is a case-insensitive substring test; method matching is
    /// case-insensitive and exact. An empty result is a valid empty list.
    pub fn filter(&self, tag: Option<&str>, method: Option<&str>) -> Vec<&'a OperationDescriptor> {
        let tag = tag.map(str::to_lowercase);
        let method = method.map(str::to_uppercase);

        self.document
            .operations
            .iter()
            .filter(|op| match tag.as_deref() {
                Some(t) => op.tags.iter().any(|label| label.to_lowercase().contains(t)),
                None => true,
            })
            .filter(|op| match method.as_deref() {
                Some(m) => op.http_method.as_str() == m,
                None => true,
            })
            .collect()
    }

    /// All operation ids, declaration order preserved
    pub fn operation_ids(&self) -> Vec<&'a str> {
        self.document
            .operations
            .iter()
            .map(|op| op.operation_id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::DocumentNormalizer;

    fn sample_document() -> ApiDocument {
        let spec = r#"
openapi: "3.0.0"
info: {title: Store, version: "1"}
paths:
  /pets:
    get:
      operationId: listPets
      tags: [Pets]
      responses: {'200': {description: ok}}
    post:
      operationId: createPet
      tags: [Pets, Admin]
      responses: {'201': {description: ok}}
  /orders:
    get:
      operationId: listOrders
      tags: [Orders]
      responses: {'200': {description: ok}}
"#;
        DocumentNormalizer::normalize(spec, "store.yaml").unwrap()
    }

    #[test]
    fn finds_by_id() {
        let doc = sample_document();
        let index = OperationIndex::build(&doc);

        assert!(index.find_by_id("listPets").is_some());
        assert!(index.find_by_id("nonexistent").is_none());
    }

    #[test]
    fn filters_by_tag_substring_case_insensitive() {
        let doc = sample_document();
        let index = OperationIndex::build(&doc);

        let pets = index.filter(Some("pet"), None);
        assert_eq!(pets.len(), 2);

        let orders = index.filter(Some("ORDER"), None);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].operation_id, "listOrders");
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        let doc = sample_document();
        let index = OperationIndex::build(&doc);

        let result = index.filter(Some("pets"), Some("post"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].operation_id, "createPet");
    }

    #[test]
    fn empty_filter_result_is_valid() {
        let doc = sample_document();
        let index = OperationIndex::build(&doc);

        assert!(index.filter(Some("billing"), None).is_empty());
    }

    #[test]
    fn no_filters_returns_all_in_declaration_order() {
        let doc = sample_document();
        let index = OperationIndex::build(&doc);

        let ids: Vec<&str> = index
            .filter(None, None)
            .iter()
            .map(|op| op.operation_id.as_str())
            .collect();
        assert_eq!(ids, vec!["listPets", "createPet", "listOrders"]);
    }
}
