use super::KeyValueStore;

pub const CONSENT_KEY: &str = "cookieConsent";

pub fn has_consented<S: KeyValueStore>(storage: &S) -> bool {
    storage.get_item(CONSENT_KEY).as_deref() == Some("true")
}

pub fn accept<S: KeyValueStore>(storage: &S) -> Result<(), String> {
    storage.set_item(CONSENT_KEY, "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn consent_is_remembered_once_accepted() {
        let storage = MemoryStorage::default();
        assert!(!has_consented(&storage));
        accept(&storage).unwrap();
        assert!(has_consented(&storage));
        assert_eq!(storage.get_item(CONSENT_KEY).as_deref(), Some("true"));
    }
}
