use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::{Account, AccountRepository, Error};

#[derive(Default, Debug)]
pub struct InMemoryStore {
    accounts: HashMap<String, Account>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Result<Self, Error> {
        let mut store = Self::new();
        for account in accounts {
            store.insert(account)?;
        }
        Ok(store)
    }
}

impl AccountRepository for InMemoryStore {
    fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    fn insert(&mut self, account: Account) -> Result<(), Error> {
        match self.accounts.entry(account.id.clone()) {
            Entry::Vacant(e) => {
                e.insert(account);
                Ok(())
            }
            Entry::Occupied(e) => Err(Error::DuplicateAccount(e.key().clone())),
        }
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
