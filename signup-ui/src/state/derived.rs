//! Derived Views
//!
//! Memos over the view-state signal. Each one only notifies its readers
//! when its own value changes, so typing into the form does not rebuild
//! the cards or the selector options.

use leptos::*;

use club_signup::{project_list, select_options, ListView, SelectOption, ViewState};

/// The list region: loading, failed or the cards
pub fn list_view(view: RwSignal<ViewState>) -> Memo<ListView> {
    create_memo(move |_| view.with(project_list))
}

/// Reactive inputs of the signup form
#[derive(Clone, Copy)]
pub struct SignupFields {
    pub options: Memo<Vec<SelectOption>>,
    pub activity: Memo<String>,
    pub email: Memo<String>,
}

pub fn signup_fields(view: RwSignal<ViewState>) -> SignupFields {
    SignupFields {
        options: create_memo(move |_| view.with(select_options)),
        activity: create_memo(move |_| view.with(|s| s.form.activity.clone())),
        email: create_memo(move |_| view.with(|s| s.form.email.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_signup::{Activity, Catalog};
    use std::cell::Cell;
    use std::rc::Rc;

    fn loaded() -> ViewState {
        let catalog: Catalog = vec![
            Activity::new("Chess Club", "Strategy", "Fri", 10).participant("a@x.com"),
            Activity::new("Art Club", "Painting", "Wed", 5),
        ]
        .into_iter()
        .collect();

        let mut state = ViewState::new();
        state.apply_catalog(catalog);
        state
    }

    /// Count how often a memo downstream of `source` recomputes
    fn counted<T: Clone + PartialEq + 'static>(source: Memo<T>) -> (Memo<usize>, Rc<Cell<usize>>) {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let memo = create_memo(move |_| {
            counter.set(counter.get() + 1);
            source.with(|_| counter.get())
        });
        (memo, runs)
    }

    #[test]
    fn test_typing_email_keeps_options_and_cards() {
        let runtime = create_runtime();
        let view = create_rw_signal(loaded());
        let fields = signup_fields(view);
        let cards = list_view(view);

        let (options_reader, option_runs) = counted(fields.options);
        let (cards_reader, card_runs) = counted(cards);
        options_reader.get_untracked();
        cards_reader.get_untracked();
        assert_eq!(option_runs.get(), 1);
        assert_eq!(card_runs.get(), 1);

        view.update(|s| s.form.activity = "Art Club".to_string());
        view.update(|s| s.form.email = "b@x.com".to_string());
        options_reader.get_untracked();
        cards_reader.get_untracked();

        assert_eq!(option_runs.get(), 1);
        assert_eq!(card_runs.get(), 1);
        assert_eq!(fields.activity.get_untracked(), "Art Club");
        assert_eq!(fields.email.get_untracked(), "b@x.com");

        runtime.dispose();
    }

    #[test]
    fn test_roster_change_updates_cards() {
        let runtime = create_runtime();
        let view = create_rw_signal(loaded());
        let cards = list_view(view);

        let spots = |list: &ListView| match list {
            ListView::Cards(cards) => cards[0].spots_left,
            _ => -1,
        };
        assert_eq!(cards.with_untracked(spots), 9);

        view.update(|s| {
            s.add_participant("Chess Club", "b@x.com");
        });
        assert_eq!(cards.with_untracked(spots), 8);
        assert_eq!(signup_fields(view).options.with_untracked(Vec::len), 3);

        runtime.dispose();
    }
}
