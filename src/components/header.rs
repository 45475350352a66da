use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Room Booking"}</h1>
            <p class="app-subtitle">{"Choose dates, rooms, and manage your bookings"}</p>
        </header>
    }
}
