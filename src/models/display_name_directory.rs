use crate::types::{DisplayName, UserId};
use log::warn;
use std::collections::HashMap;

/// Maps user identifiers to their last-seen display name.
pub struct DisplayNameDirectory {
    names: HashMap<UserId, DisplayName>,
    placeholder: &'static str,
}

impl DisplayNameDirectory {
    pub fn new(placeholder: &'static str) -> Self {
        DisplayNameDirectory {
            names: HashMap::new(),
            placeholder,
        }
    }

    /// Overwrites the display name of `user_id`.
    pub fn update(&mut self, user_id: &str, name: &str) {
        self.names.insert(user_id.to_string(), name.to_string());
    }

    /// Records whatever name the transport could provide for `user_id`.
    ///
    /// A missing or blank name still records the placeholder, so a user who has posted is
    /// never absent from the directory.
    pub fn observe(&mut self, user_id: &str, name: Option<&str>) {
        match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => self.update(user_id, name),
            None => {
                warn!(
                    "No display name available for {}, using \"{}\"",
                    user_id, self.placeholder
                );
                self.update(user_id, self.placeholder);
            }
        }
    }

    pub fn lookup(&self, user_id: &str) -> &str {
        self.names
            .get(user_id)
            .map(String::as_str)
            .unwrap_or(self.placeholder)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.names.contains_key(user_id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
