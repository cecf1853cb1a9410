/// Which side of an operation referenced a missing account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    User,
    Sender,
    Receiver,
}

impl core::fmt::Display for Party {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Party::User => write!(f, "User"),
            Party::Sender => write!(f, "Sender"),
            Party::Receiver => write!(f, "Receiver"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Seeding failed with: {0}")]
    Seed(String),

    #[error("Account {0} already exists")]
    DuplicateAccount(String),

    #[error("{0}")]
    Validation(String),

    // Unknown id and wrong PIN deliberately share this variant.
    #[error("Invalid credentials")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(Party),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Balance would exceed the supported range")]
    BalanceOverflow,
}
