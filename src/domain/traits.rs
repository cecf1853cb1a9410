use crate::domain::{Account, Error};

/// Storage seam for accounts. Implementations need no locking of their own:
/// the service serializes every call.
pub trait AccountRepository {
    fn get(&self, id: &str) -> Option<&Account>;

    fn get_mut(&mut self, id: &str) -> Option<&mut Account>;

    /// Fails with [`Error::DuplicateAccount`] if the id is already taken.
    fn insert(&mut self, account: Account) -> Result<(), Error>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
