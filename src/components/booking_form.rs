// ============================================================================
// BOOKING FORM COMPONENT
// ============================================================================
// Creation form. Notifies the parent through on_created after the backend
// accepts the draft.
// ============================================================================

use yew::prelude::*;

use super::fields::{on_input, on_select, on_textarea, room_type_options};
use crate::hooks::use_booking_form;
use crate::models::{Booking, BookingField};
use crate::utils::constants::{MAX_NIGHTS, MAX_ROOMS, MIN_NIGHTS, MIN_ROOMS};

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub on_created: Callback<Booking>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let form = use_booking_form(props.on_created.clone());
    let store = &*form.state;
    let draft = &store.draft;

    let onsubmit = {
        let submit = form.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="card booking-form">
            <h2>{"Create a booking"}</h2>

            {if let Some(ref error) = store.error {
                html! { <div class="error-banner">{error.clone()}</div> }
            } else {
                html! {}
            }}

            <form class="form-grid" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="guest_name">{"Guest name"}</label>
                    <input
                        id="guest_name"
                        name="guest_name"
                        value={draft.guest_name.clone()}
                        oninput={on_input(&form.set_field, BookingField::GuestName)}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        value={draft.email.clone()}
                        oninput={on_input(&form.set_field, BookingField::Email)}
                    />
                </div>

                <div class="form-group">
                    <label for="start_date">{"Check-in date"}</label>
                    <input
                        type="date"
                        id="start_date"
                        name="start_date"
                        value={draft.start_date.clone()}
                        oninput={on_input(&form.set_field, BookingField::StartDate)}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="duration_days">{"Nights"}</label>
                    <input
                        type="number"
                        id="duration_days"
                        name="duration_days"
                        min={MIN_NIGHTS.to_string()}
                        max={MAX_NIGHTS.to_string()}
                        value={draft.duration_days.to_string()}
                        oninput={on_input(&form.set_field, BookingField::DurationDays)}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="rooms">{"Rooms"}</label>
                    <input
                        type="number"
                        id="rooms"
                        name="rooms"
                        min={MIN_ROOMS.to_string()}
                        max={MAX_ROOMS.to_string()}
                        value={draft.rooms.to_string()}
                        oninput={on_input(&form.set_field, BookingField::Rooms)}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="room_type">{"Room type"}</label>
                    // A fresh element per reset so the browser's own selection can't outlive the draft
                    <select
                        key={store.generation.to_string()}
                        id="room_type"
                        name="room_type"
                        onchange={on_select(&form.set_field, BookingField::RoomType)}
                    >
                        {room_type_options(draft.room_type)}
                    </select>
                </div>

                <div class="form-group wide">
                    <label for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        name="notes"
                        rows="2"
                        value={draft.notes.clone()}
                        oninput={on_textarea(&form.set_field, BookingField::Notes)}
                    />
                </div>

                <div class="form-actions wide">
                    <button type="submit" class="btn-primary" disabled={store.loading}>
                        {if store.loading { "Creating..." } else { "Create booking" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
