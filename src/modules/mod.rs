pub mod banks;
pub mod charges;
pub mod fees;
pub mod preauth;
pub mod transactions;
