pub mod change_locator;
