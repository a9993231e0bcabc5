//! Backend clients for the personalization endpoint

pub mod personalize;
