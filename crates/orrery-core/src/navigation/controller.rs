use crate::catalog::{BodyId, Catalog};

/// Which body, if any, is focused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Focused(BodyId),
}

impl Selection {
    pub fn id(&self) -> Option<&BodyId> {
        match self {
            Selection::Idle => None,
            Selection::Focused(id) => Some(id),
        }
    }
}

/// Selection state machine over the ordered catalog.
///
/// Index arithmetic always wraps, so every transition lands on a catalog
/// member. `Idle` sits outside the cycle: `next` from `Idle` enters at the
/// first body, `previous` at the last.
#[derive(Debug, Clone)]
pub struct NavigationController {
    order: Vec<BodyId>,
    selection: Selection,
}

impl NavigationController {
    /// Build a controller over `catalog` (validated, so never empty).
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            order: catalog.ids(),
            selection: Selection::Idle,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&BodyId> {
        self.selection.id()
    }

    /// Position of the focused body in traversal order.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.id().and_then(|id| self.index_of(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn index_of(&self, id: &BodyId) -> Option<usize> {
        self.order.iter().position(|b| b == id)
    }

    /// Focus `id`. Returns false (and leaves the state untouched) when `id`
    /// is not in the catalog.
    pub fn select(&mut self, id: &BodyId) -> bool {
        if self.index_of(id).is_none() {
            log::warn!("select: unknown body `{id}` ignored");
            return false;
        }
        self.selection = Selection::Focused(id.clone());
        true
    }

    /// Focus the body at traversal position `index`.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.order.get(index) {
            Some(id) => {
                self.selection = Selection::Focused(id.clone());
                true
            }
            None => {
                log::warn!("select_index: {index} out of range ({} bodies)", self.order.len());
                false
            }
        }
    }

    /// Body `next` would focus, without moving.
    pub fn peek_next(&self) -> &BodyId {
        let n = self.order.len();
        let i = match self.selected_index() {
            Some(i) => (i + 1) % n,
            None => 0,
        };
        &self.order[i]
    }

    /// Body `previous` would focus, without moving.
    pub fn peek_previous(&self) -> &BodyId {
        let n = self.order.len();
        let i = match self.selected_index() {
            Some(i) => (i + n - 1) % n,
            None => n - 1,
        };
        &self.order[i]
    }

    pub fn next(&mut self) {
        let id = self.peek_next().clone();
        self.selection = Selection::Focused(id);
    }

    pub fn previous(&mut self) {
        let id = self.peek_previous().clone();
        self.selection = Selection::Focused(id);
    }

    /// Back to `Idle`. Idempotent.
    pub fn clear(&mut self) {
        self.selection = Selection::Idle;
    }

    /// The detail overlay was closed explicitly. Same transition as `clear`.
    pub fn dismiss_overlay(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::inner_system;

    fn focused(id: &str) -> Selection {
        Selection::Focused(BodyId::from(id))
    }

    #[test]
    fn walkthrough_with_wrap() {
        let mut nav = NavigationController::new(&inner_system());
        assert_eq!(nav.selection(), &Selection::Idle);
        nav.next();
        assert_eq!(nav.selection(), &focused("sun"));
        nav.next();
        assert_eq!(nav.selection(), &focused("mercury"));
        nav.previous();
        assert_eq!(nav.selection(), &focused("sun"));
        nav.previous();
        assert_eq!(nav.selection(), &focused("earth"));
    }

    #[test]
    fn previous_from_idle_selects_last() {
        let mut nav = NavigationController::new(&inner_system());
        nav.previous();
        assert_eq!(nav.selection(), &focused("earth"));
    }

    #[test]
    fn next_cycles_back_after_n_steps() {
        let catalog = inner_system();
        let mut nav = NavigationController::new(&catalog);
        for start in 0..catalog.len() {
            nav.select_index(start);
            let before = nav.selection().clone();
            for _ in 0..catalog.len() {
                nav.next();
            }
            assert_eq!(nav.selection(), &before);
        }
    }

    #[test]
    fn previous_inverts_next() {
        let catalog = inner_system();
        let mut nav = NavigationController::new(&catalog);
        for start in 0..catalog.len() {
            nav.select_index(start);
            let before = nav.selection().clone();
            nav.next();
            nav.previous();
            assert_eq!(nav.selection(), &before);
            nav.previous();
            nav.next();
            assert_eq!(nav.selection(), &before);
        }
    }

    #[test]
    fn select_then_clear_is_idle() {
        let mut nav = NavigationController::new(&inner_system());
        nav.select(&BodyId::from("venus"));
        nav.clear();
        assert_eq!(nav.selection(), &Selection::Idle);
        nav.clear();
        assert_eq!(nav.selection(), &Selection::Idle);

        nav.next();
        nav.select(&BodyId::from("earth"));
        nav.dismiss_overlay();
        assert_eq!(nav.selection(), &Selection::Idle);
    }

    #[test]
    fn unknown_select_is_noop() {
        let mut nav = NavigationController::new(&inner_system());
        nav.select(&BodyId::from("mercury"));
        assert!(!nav.select(&BodyId::from("pluto")));
        assert_eq!(nav.selection(), &focused("mercury"));
        assert!(!nav.select_index(42));
        assert_eq!(nav.selection(), &focused("mercury"));
    }

    #[test]
    fn single_body_catalog_wraps_onto_itself() {
        use crate::catalog::tests::sun;
        let catalog = Catalog::new(vec![sun()]).unwrap();
        let mut nav = NavigationController::new(&catalog);
        nav.next();
        assert_eq!(nav.selection(), &focused("sun"));
        nav.next();
        assert_eq!(nav.selection(), &focused("sun"));
        nav.previous();
        assert_eq!(nav.selection(), &focused("sun"));
    }

    #[test]
    fn peek_does_not_move() {
        let mut nav = NavigationController::new(&inner_system());
        nav.select(&BodyId::from("sun"));
        assert_eq!(nav.peek_next().as_str(), "mercury");
        assert_eq!(nav.peek_previous().as_str(), "earth");
        assert_eq!(nav.selection(), &focused("sun"));
        assert_eq!(nav.selected_index(), Some(0));
    }
}
