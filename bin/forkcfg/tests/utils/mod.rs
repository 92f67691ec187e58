pub mod snapbox;
