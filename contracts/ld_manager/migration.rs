use split_helpers::ensure;
use traits::LdManagerError;

/// One-way availability state of the managed balance.
///
/// Starts out fully active. `block` permanently disables migration while
/// leaving the drain path open; `finish` permanently disables every
/// balance move. Neither transition can be undone.
#[derive(Default, Debug, scale::Encode, scale::Decode, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct MigrationState {
    migrate_blocked: bool,
    finished: bool,
}

impl MigrationState {
    pub fn migrate_blocked(&self) -> bool {
        self.migrate_blocked
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Errors unless the balance can still be migrated.
    pub fn ensure_can_migrate(&self) -> Result<(), LdManagerError> {
        self.ensure_not_finished()?;
        ensure!(!self.migrate_blocked, LdManagerError::MigrationBlocked);
        Ok(())
    }

    pub fn ensure_not_finished(&self) -> Result<(), LdManagerError> {
        ensure!(!self.finished, LdManagerError::AlreadyFinished);
        Ok(())
    }

    /// Sets the migration latch. Returns whether this call flipped it.
    pub fn block(&mut self) -> Result<bool, LdManagerError> {
        self.ensure_not_finished()?;
        let flipped = !self.migrate_blocked;
        self.migrate_blocked = true;
        Ok(flipped)
    }

    /// Marks the component finished, once.
    pub fn finish(&mut self) -> Result<(), LdManagerError> {
        self.ensure_not_finished()?;
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_allows_everything() {
        let state = MigrationState::default();
        assert!(!state.migrate_blocked());
        assert!(!state.finished());
        assert_eq!(state.ensure_can_migrate(), Ok(()));
        assert_eq!(state.ensure_not_finished(), Ok(()));
    }

    #[test]
    fn latch_disables_migration_and_is_idempotent() {
        let mut state = MigrationState::default();
        assert_eq!(state.block(), Ok(true));
        assert!(state.migrate_blocked());
        assert_eq!(
            state.ensure_can_migrate(),
            Err(LdManagerError::MigrationBlocked)
        );
        // the drain path stays open
        assert_eq!(state.ensure_not_finished(), Ok(()));

        // setting the latch again is a quiet no-op
        assert_eq!(state.block(), Ok(false));
        assert!(state.migrate_blocked());
    }

    #[test]
    fn finish_is_terminal() {
        let mut state = MigrationState::default();
        assert_eq!(state.finish(), Ok(()));
        assert!(state.finished());

        assert_eq!(
            state.ensure_can_migrate(),
            Err(LdManagerError::AlreadyFinished)
        );
        assert_eq!(state.finish(), Err(LdManagerError::AlreadyFinished));
        assert_eq!(state.block(), Err(LdManagerError::AlreadyFinished));
    }

    #[test]
    fn finish_after_latch_still_works() {
        let mut state = MigrationState::default();
        assert_eq!(state.block(), Ok(true));
        assert_eq!(state.finish(), Ok(()));
        assert!(state.finished());
    }
}
