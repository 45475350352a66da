// Input wiring shared by the creation form and the inline edit row

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{BookingField, RoomType};

pub fn on_input(set_field: &Callback<(BookingField, String)>, field: BookingField) -> Callback<InputEvent> {
    let set_field = set_field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        set_field.emit((field, input.value()));
    })
}

pub fn on_textarea(set_field: &Callback<(BookingField, String)>, field: BookingField) -> Callback<InputEvent> {
    let set_field = set_field.clone();
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        set_field.emit((field, area.value()));
    })
}

pub fn on_select(set_field: &Callback<(BookingField, String)>, field: BookingField) -> Callback<Event> {
    let set_field = set_field.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        set_field.emit((field, select.value()));
    })
}

pub fn room_type_options(selected: RoomType) -> Html {
    RoomType::ALL
        .iter()
        .map(|room_type| {
            html! {
                <option value={room_type.as_str()} selected={*room_type == selected}>
                    {room_type.label()}
                </option>
            }
        })
        .collect()
}
