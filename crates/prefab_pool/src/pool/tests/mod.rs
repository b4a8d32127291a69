//! Pool registry scenario tests

mod table_host;
