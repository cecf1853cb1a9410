use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::{
    AccountRepository, Authenticated, Deposited, Error, Party, PositiveAmount, Transaction,
    Transferred,
};

/// Business operations over an account repository.
///
/// The repository sits behind one mutex and every operation holds it for its
/// whole check-then-write sequence, so a transfer's funds check and both
/// balance updates happen as a single critical section.
#[derive(Debug)]
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Mutex<R>,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository: Mutex::new(repository),
        }
    }

    pub fn authenticate(&self, name: &str, pin: &str) -> Result<Authenticated, Error> {
        let repository = self.lock();

        match repository.get(name) {
            Some(account) if account.verify_pin(pin) => {
                debug!(account = name, "authenticated");
                Ok(Authenticated {
                    balance: account.balance,
                })
            }
            _ => {
                warn!(account = name, "authentication rejected");
                Err(Error::Unauthorized)
            }
        }
    }

    pub fn deposit(&self, name: &str, amount: PositiveAmount) -> Result<Deposited, Error> {
        let mut repository = self.lock();

        let result = Self::apply_deposit(&mut *repository, name, amount);
        Self::report(
            &result,
            Transaction::Deposit {
                account: name.to_string(),
                amount,
            },
        );
        result
    }

    pub fn transfer(
        &self,
        sender: &str,
        receiver: &str,
        amount: PositiveAmount,
    ) -> Result<Transferred, Error> {
        let mut repository = self.lock();

        let result = Self::apply_transfer(&mut *repository, sender, receiver, amount);
        Self::report(
            &result,
            Transaction::Transfer {
                sender: sender.to_string(),
                receiver: receiver.to_string(),
                amount,
            },
        );
        result
    }

    pub fn account_count(&self) -> usize {
        self.lock().len()
    }

    // Every write below happens after all checks pass, so the guarded state is
    // consistent even if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, R> {
        self.repository
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_deposit(
        repository: &mut R,
        name: &str,
        amount: PositiveAmount,
    ) -> Result<Deposited, Error> {
        let account = repository
            .get_mut(name)
            .ok_or(Error::NotFound(Party::User))?;

        let balance = account
            .balance
            .checked_add(amount.value())
            .ok_or(Error::BalanceOverflow)?;
        account.balance = balance;

        Ok(Deposited { balance })
    }

    fn apply_transfer(
        repository: &mut R,
        sender: &str,
        receiver: &str,
        amount: PositiveAmount,
    ) -> Result<Transferred, Error> {
        let sender_balance = repository
            .get(sender)
            .ok_or(Error::NotFound(Party::Sender))?
            .balance;
        let receiver_balance = repository
            .get(receiver)
            .ok_or(Error::NotFound(Party::Receiver))?
            .balance;

        if sender_balance < amount.value() {
            return Err(Error::InsufficientFunds);
        }

        let sender_new = sender_balance - amount.value();
        // A self-transfer credits the record it just debited.
        let receiver_base = if sender == receiver {
            sender_new
        } else {
            receiver_balance
        };
        let receiver_new = receiver_base
            .checked_add(amount.value())
            .ok_or(Error::BalanceOverflow)?;

        if let Some(account) = repository.get_mut(sender) {
            account.balance = sender_new;
        }
        if let Some(account) = repository.get_mut(receiver) {
            account.balance = receiver_new;
        }

        Ok(Transferred {
            sender_balance: if sender == receiver {
                receiver_new
            } else {
                sender_new
            },
            receiver_balance: receiver_new,
        })
    }

    fn report<T>(result: &Result<T, Error>, transaction: Transaction) {
        match result {
            Ok(_) => debug!(%transaction, "applied"),
            Err(e) => warn!(%transaction, error = %e, "rejected"),
        }
    }
}
