fn main() {
    room_booking_ui::run();
}
