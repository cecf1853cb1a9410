pub mod account;
pub mod error;
pub mod traits;
pub mod transaction;

pub use account::{Account, PositiveAmount};
pub use error::{Error, Party};
pub use traits::AccountRepository;
pub use transaction::{Authenticated, Deposited, Transaction, Transferred};
