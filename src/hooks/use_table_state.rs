use std::rc::Rc;
use yew::prelude::*;

use crate::models::table::{TableAction, TableState};

impl Reducible for TableState {
    type Action = TableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Sector selection and sort state owned by the sectors page.
#[hook]
pub fn use_table_state() -> UseReducerHandle<TableState> {
    use_reducer(TableState::default)
}
