pub mod car_code_controller;
pub mod dealer_controller;
