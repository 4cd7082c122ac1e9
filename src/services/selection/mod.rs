pub mod selection_controller;
