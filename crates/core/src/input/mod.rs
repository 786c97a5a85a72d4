pub mod click_router;
pub mod control_event;
