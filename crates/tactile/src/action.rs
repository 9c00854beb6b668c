use crate::geometry::MAX_ACTIONS;
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ActionId(String);

crate::impl_string_newtype!(ActionId);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

/// One entry of the radial menu.  The handler is opaque to the engine
/// and is invoked at most once per opened menu, fire-and-forget.
#[derive(Clone)]
pub struct ActionSpec<T> {
    pub id: ActionId,
    pub label: String,
    pub icon: IconName,
    pub color: Srgba<f64>,
    pub handler: Rc<dyn Fn(&T)>,
}

impl<T> fmt::Debug for ActionSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSpec")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog must hold 1..={MAX_ACTIONS} actions, got {0}")]
    BadSize(usize),
    #[error("duplicate action id '{0}'")]
    DuplicateId(ActionId),
}

/// Ordered, validated set of actions; the order is the arc order.
#[derive(Debug, Clone)]
pub struct ActionCatalog<T> {
    specs: Vec<ActionSpec<T>>,
}

impl<T> ActionCatalog<T> {
    pub fn new(specs: Vec<ActionSpec<T>>) -> Result<Self, CatalogError> {
        if specs.is_empty() || specs.len() > MAX_ACTIONS {
            return Err(CatalogError::BadSize(specs.len()));
        }
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|s| s.id == spec.id) {
                return Err(CatalogError::DuplicateId(spec.id.clone()));
            }
        }
        Ok(Self { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ActionSpec<T>> {
        self.specs.get(index)
    }

    pub fn find(&self, id: &ActionId) -> Option<&ActionSpec<T>> {
        self.specs.iter().find(|s| &s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionSpec<T>> {
        self.specs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str) -> ActionSpec<()> {
        ActionSpec {
            id: ActionId::new(id),
            label: id.to_string(),
            icon: IconName::new(id),
            color: Srgba::new(1.0, 1.0, 1.0, 1.0),
            handler: Rc::new(|_| {}),
        }
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(matches!(
            ActionCatalog::<()>::new(vec![]),
            Err(CatalogError::BadSize(0))
        ));
        let five = ["a", "b", "c", "d", "e"].map(spec).to_vec();
        assert!(matches!(
            ActionCatalog::new(five),
            Err(CatalogError::BadSize(5))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ActionCatalog::new(vec![spec("archive"), spec("archive")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_ref() == "archive"));
    }

    #[test]
    fn preserves_order() {
        let catalog = ActionCatalog::new(vec![spec("a"), spec("b"), spec("c")]).unwrap();
        let ids: Vec<_> = catalog.iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert!(catalog.find(&ActionId::new("b")).is_some());
        assert!(catalog.find(&ActionId::new("z")).is_none());
    }

    #[test]
    fn action_id_serde_is_transparent() {
        let id: ActionId = serde_json::from_str("\"archive\"").unwrap();
        assert_eq!(id, ActionId::new("archive"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"archive\"");
    }
}
