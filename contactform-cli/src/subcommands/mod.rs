pub mod send;
mod send_handler;
