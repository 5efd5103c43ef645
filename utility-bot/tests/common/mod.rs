#![allow(dead_code)] // each test binary uses a different subset

pub mod mock_bot;
