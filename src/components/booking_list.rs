// ============================================================================
// BOOKING LIST COMPONENT
// ============================================================================

use yew::prelude::*;

use super::booking_row::{BookingEditRow, BookingRow};
use crate::hooks::use_booking_list;
use crate::stores::ListPhase;

#[function_component(BookingList)]
pub fn booking_list() -> Html {
    let list = use_booking_list();
    let store = &*list.state;

    let bookings = match &store.phase {
        ListPhase::Loading => return html! { <div class="list-status">{"Loading bookings..."}</div> },
        ListPhase::Failed(message) => return html! { <div class="list-status error">{message.clone()}</div> },
        ListPhase::Ready(bookings) => bookings,
    };

    html! {
        <div class="card booking-list">
            <div class="list-header">
                <h2>{"Your bookings"}</h2>
                <button class="btn-small" onclick={list.refresh.reform(|_| ())}>{"Refresh"}</button>
            </div>
            <div class="list-body">
                {if bookings.is_empty() {
                    html! { <p class="list-empty">{"No bookings yet"}</p> }
                } else {
                    html! {}
                }}
                { for bookings.iter().map(|booking| {
                    let row = match &store.editing {
                        Some(session) if session.id == booking.id => html! {
                            <BookingEditRow
                                form={session.form.clone()}
                                on_field={list.edit_field.clone()}
                                on_status={list.edit_status.clone()}
                                on_cancel={list.cancel_edit.clone()}
                                on_save={list.save_edit.clone()}
                            />
                        },
                        _ => html! {
                            <BookingRow
                                booking={booking.clone()}
                                on_edit={list.start_edit.clone()}
                                on_delete={list.remove.clone()}
                            />
                        },
                    };
                    html! {
                        <div key={booking.id.to_string()} class="booking-item">{row}</div>
                    }
                }) }
            </div>
        </div>
    }
}
