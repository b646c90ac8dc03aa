pub mod a001_room;
pub mod a002_checkin;
pub mod a003_booking;
