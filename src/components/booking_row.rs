use yew::prelude::*;

use super::fields::{on_input, on_select, on_textarea, room_type_options};
use crate::models::{Booking, BookingEdit, BookingField, BookingId};
use crate::utils::constants::{MAX_NIGHTS, MAX_ROOMS, MIN_NIGHTS, MIN_ROOMS};
use crate::utils::{format_date, format_price};

#[derive(Properties, PartialEq)]
pub struct BookingRowProps {
    pub booking: Booking,
    pub on_edit: Callback<Booking>,
    pub on_delete: Callback<BookingId>,
}

/// Read-only summary of one booking
#[function_component(BookingRow)]
pub fn booking_row(props: &BookingRowProps) -> Html {
    let booking = &props.booking;

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let booking = booking.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(booking.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = booking.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <div class="booking-row">
            <div class="booking-guest">
                <div class="guest-name">{&booking.guest_name}</div>
                <div class="guest-email">
                    {booking.email.as_deref().filter(|email| !email.is_empty()).unwrap_or("—")}
                </div>
            </div>
            <div class="booking-dates">
                <div>{format_date(&booking.start_date)}</div>
                <div class="small">{format!("{} nights", booking.duration_days)}</div>
            </div>
            <div class="booking-rooms">{format!("{} rooms • {}", booking.rooms, booking.room_type)}</div>
            <div class="booking-price">{format_price(booking.total_price)}</div>
            <div class="row-actions">
                <button class="btn-secondary" onclick={on_edit}>{"Edit"}</button>
                <button class="btn-danger" onclick={on_delete}>{"Delete"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingEditRowProps {
    pub form: BookingEdit,
    pub on_field: Callback<(BookingField, String)>,
    pub on_status: Callback<String>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
}

/// Inline edit form, pre-filled from the booking being edited
#[function_component(BookingEditRow)]
pub fn booking_edit_row(props: &BookingEditRowProps) -> Html {
    let fields = &props.form.fields;

    let on_status = {
        let on_status = props.on_status.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_status.emit(input.value());
        })
    };

    html! {
        <div class="booking-edit form-grid">
            <input
                aria-label="Guest name"
                value={fields.guest_name.clone()}
                oninput={on_input(&props.on_field, BookingField::GuestName)}
            />
            <input
                type="email"
                aria-label="Email"
                value={fields.email.clone()}
                oninput={on_input(&props.on_field, BookingField::Email)}
            />
            <input
                type="date"
                aria-label="Check-in date"
                value={fields.start_date.clone()}
                oninput={on_input(&props.on_field, BookingField::StartDate)}
            />
            <input
                type="number"
                aria-label="Nights"
                min={MIN_NIGHTS.to_string()}
                max={MAX_NIGHTS.to_string()}
                value={fields.duration_days.to_string()}
                oninput={on_input(&props.on_field, BookingField::DurationDays)}
            />
            <input
                type="number"
                aria-label="Rooms"
                min={MIN_ROOMS.to_string()}
                max={MAX_ROOMS.to_string()}
                value={fields.rooms.to_string()}
                oninput={on_input(&props.on_field, BookingField::Rooms)}
            />
            <select aria-label="Room type" onchange={on_select(&props.on_field, BookingField::RoomType)}>
                {room_type_options(fields.room_type)}
            </select>
            <input aria-label="Status" value={props.form.status.clone()} oninput={on_status} />
            <textarea
                rows="2"
                class="wide"
                aria-label="Notes"
                value={fields.notes.clone()}
                oninput={on_textarea(&props.on_field, BookingField::Notes)}
            />
            <div class="row-actions wide">
                <button class="btn-secondary" onclick={props.on_cancel.reform(|_| ())}>{"Cancel"}</button>
                <button class="btn-primary" onclick={props.on_save.reform(|_| ())}>{"Save"}</button>
            </div>
        </div>
    }
}
