// ============================================================================
// USE BOOKING LIST HOOK
// ============================================================================
// Fetches on mount. A remount (new component key) starts from scratch.
// ============================================================================

use yew::prelude::*;

use crate::models::{Booking, BookingField, BookingId};
use crate::stores::{BookingListAction, BookingListStore};
use crate::viewmodels::BookingListViewModel;

#[derive(Clone)]
pub struct UseBookingListHandle {
    pub state: UseReducerHandle<BookingListStore>,
    pub refresh: Callback<()>,
    pub start_edit: Callback<Booking>,
    pub edit_field: Callback<(BookingField, String)>,
    pub edit_status: Callback<String>,
    pub cancel_edit: Callback<()>,
    pub save_edit: Callback<()>,
    pub remove: Callback<BookingId>,
}

#[hook]
pub fn use_booking_list() -> UseBookingListHandle {
    let state = use_reducer(BookingListStore::default);

    let refresh = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| {
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = BookingListViewModel::new();
                vm.refresh(&move |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let start_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |booking: Booking| dispatcher.dispatch(BookingListAction::StartEdit(booking)))
    };

    let edit_field = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (BookingField, String)| {
            dispatcher.dispatch(BookingListAction::EditField(field, value));
        })
    };

    let edit_status = {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(BookingListAction::EditStatus(value)))
    };

    let cancel_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BookingListAction::CancelEdit))
    };

    let save_edit = {
        let state = state.clone();
        Callback::from(move |_| {
            let Some(session) = state.editing.clone() else {
                return;
            };
            let dispatcher = state.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = BookingListViewModel::new();
                vm.save_edit(&session, &move |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    let remove = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: BookingId| {
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = BookingListViewModel::new();
                vm.remove(&id, &move |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    UseBookingListHandle {
        state,
        refresh,
        start_edit,
        edit_field,
        edit_status,
        cancel_edit,
        save_edit,
        remove,
    }
}
