// ============================================================================
// APP - Composition root
// ============================================================================
// Form and list don't talk to each other. A successful creation bumps the
// refresh key, the list gets a new key, remounts and fetches from scratch.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use super::{BookingForm, BookingList, Header};
use crate::models::Booking;

/// Monotonic remount counter for the list
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RefreshKey(pub u32);

impl Reducible for RefreshKey {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(RefreshKey(self.0.wrapping_add(1)))
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let refresh_key = use_reducer(RefreshKey::default);

    let on_created = {
        let dispatcher = refresh_key.dispatcher();
        Callback::from(move |booking: Booking| {
            log::info!("🔄 Booking {} created, reloading list", booking.id);
            dispatcher.dispatch(());
        })
    };

    html! {
        <div class="app">
            <div class="app-content">
                <Header />
                <div class="layout">
                    <div class="layout-form">
                        <BookingForm on_created={on_created} />
                    </div>
                    <div class="layout-list">
                        <BookingList key={refresh_key.0.to_string()} />
                    </div>
                </div>
            </div>
        </div>
    }
}
