pub mod ask_adapter;
pub mod session_controller;
pub mod suggestion_service;
