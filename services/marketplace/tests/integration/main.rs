mod helpers;

mod register_test;
mod request_test;
