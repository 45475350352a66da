// ============================================================================
// USE BOOKING FORM HOOK
// ============================================================================

use yew::prelude::*;

use crate::models::{Booking, BookingField};
use crate::stores::{BookingFormAction, BookingFormStore};
use crate::viewmodels::BookingFormViewModel;

#[derive(Clone)]
pub struct UseBookingFormHandle {
    pub state: UseReducerHandle<BookingFormStore>,
    pub set_field: Callback<(BookingField, String)>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_booking_form(on_created: Callback<Booking>) -> UseBookingFormHandle {
    let state = use_reducer(BookingFormStore::default);

    let set_field = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (BookingField, String)| {
            dispatcher.dispatch(BookingFormAction::SetField(field, value));
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            let store = (*state).clone();
            let dispatcher = state.dispatcher();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = BookingFormViewModel::new();
                let dispatch = move |action| dispatcher.dispatch(action);
                if let Some(booking) = vm.submit(&store, &dispatch).await {
                    on_created.emit(booking);
                }
            });
        })
    };

    UseBookingFormHandle {
        state,
        set_field,
        submit,
    }
}
