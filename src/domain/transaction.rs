use rust_decimal::Decimal;

use crate::domain::PositiveAmount;

/// A balance mutation that was applied to the store.
#[derive(Debug, Clone)]
pub enum Transaction {
    Deposit {
        account: String,
        amount: PositiveAmount,
    },
    Transfer {
        sender: String,
        receiver: String,
        amount: PositiveAmount,
    },
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Transaction::Deposit { account, amount } => {
                write!(f, "deposit,account={},amount={}", account, amount)
            }
            Transaction::Transfer {
                sender,
                receiver,
                amount,
            } => write!(
                f,
                "transfer,sender={},receiver={},amount={}",
                sender, receiver, amount
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated {
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposited {
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transferred {
    pub sender_balance: Decimal,
    pub receiver_balance: Decimal,
}
