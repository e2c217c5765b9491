use std::cell::RefCell;

use super::ContactStore;
use crate::domain::Contact;
use crate::errors::AppError;

/// In-memory store, mainly for tests. RefCell interior mutability
/// keeps the trait's `&self` signatures workable.
#[derive(Default)]
pub struct MemStore {
    pub data: RefCell<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(Vec::new()),
        }
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_the_whole_list() -> Result<(), AppError> {
        let store = MemStore::new();

        let first = vec![Contact {
            name: "Uche".to_string(),
            phone: "01234567890".to_string(),
            email: "ucheuche@gmail.com".to_string(),
        }];
        let second = vec![Contact {
            name: "Alex".to_string(),
            phone: "+44731484372".to_string(),
            email: "".to_string(),
        }];

        store.save(&first)?;
        store.save(&second)?;

        assert_eq!(store.load()?, second);
        Ok(())
    }

    #[test]
    fn load_hands_out_a_copy() -> Result<(), AppError> {
        let store = MemStore::new();
        store.save(&[Contact {
            name: "Uche".to_string(),
            phone: "01234567890".to_string(),
            email: "".to_string(),
        }])?;

        let mut copy = store.load()?;
        copy.clear();

        assert_eq!(store.load()?.len(), 1);
        Ok(())
    }
}
