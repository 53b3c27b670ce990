pub mod request_payload;
pub mod response_fragment;
