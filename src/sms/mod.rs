mod gateway;

pub use gateway::{SmsConfig, SmsGateway, SmsReceipt, DEMO_MESSAGE};
