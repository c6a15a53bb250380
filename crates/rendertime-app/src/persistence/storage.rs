//! Saving and restoring the form inputs through eframe's key-value storage.

use eframe::Storage;

use crate::state::AppState;

const STATE_KEY: &str = "rendertime_state";

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct PersistedState {
    frames_input: String,
    seconds_input: String,
}

impl From<&AppState> for PersistedState {
    fn from(app_state: &AppState) -> Self {
        Self {
            frames_input: app_state.frames_input.clone(),
            seconds_input: app_state.seconds_input.clone(),
        }
    }
}

impl From<PersistedState> for AppState {
    fn from(persisted: PersistedState) -> Self {
        AppState::from_inputs(persisted.frames_input, persisted.seconds_input)
    }
}

pub(crate) fn load_state(storage: &dyn Storage) -> Option<AppState> {
    let persisted: PersistedState = eframe::get_value(storage, STATE_KEY)?;
    log::debug!("restored saved inputs: {persisted:?}");
    Some(persisted.into())
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    eframe::set_value(storage, STATE_KEY, &PersistedState::from(app_state));
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rendertime_core::ValidationError;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn inputs_survive_a_restart() {
        let mut storage = MemoryStorage::default();
        let mut app_state = AppState::from_inputs("24*60".to_owned(), "1.5".to_owned());
        app_state.outcome = Some(Err(ValidationError::MissingInput));

        save_state(&mut storage, &app_state);
        let restored = load_state(&storage).unwrap();

        assert_eq!(restored.frames_input, "24*60");
        assert_eq!(restored.seconds_input, "1.5");
        assert!(restored.outcome.is_none());
        assert!(!restored.is_dirty());
    }

    #[test]
    fn missing_or_corrupt_state_is_ignored() {
        let mut storage = MemoryStorage::default();
        assert!(load_state(&storage).is_none());

        storage.set_string(STATE_KEY, "not ron".to_owned());
        assert!(load_state(&storage).is_none());
    }
}
