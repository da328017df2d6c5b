multiversx_sc::imports!();

use crate::errors::*;
use crate::reward_ledger_proxy::RewardLedgerProxy;
use crate::types::{Mission, MissionStatus};

/// Owner and mission-creator administration.
///
/// Every guard here is an explicit predicate called first thing in the
/// endpoint. Creator endpoints and their `emergency*` owner twins share the
/// same effect helpers; only the role check differs.
#[multiversx_sc::module]
pub trait AccessControlModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    // ========================================================
    // Global configuration (owner)
    // ========================================================

    #[endpoint(setMaxAttestationAge)]
    fn set_max_attestation_age(&self, days: u64) {
        self.lock_reentrancy();
        self.require_owner();
        require!(days > 0, ERR_INVALID_ATTESTATION_AGE);

        let old_days = self.max_attestation_age().get();
        self.max_attestation_age().set(days);

        self.max_attestation_age_updated_event(old_days, days);
        self.unlock_reentrancy();
    }

    /// Informational only; attestations are never checked against it.
    #[endpoint(setDefaultVerifier)]
    fn set_default_verifier(&self, verifier: ManagedAddress) {
        self.lock_reentrancy();
        self.require_owner();
        require!(!verifier.is_zero(), ERR_ZERO_ADDRESS);

        let old_verifier = self.current_default_verifier();
        self.default_verifier().set(&verifier);

        self.default_verifier_updated_event(&old_verifier, &verifier);
        self.unlock_reentrancy();
    }

    #[endpoint(setBadgeRegistry)]
    fn set_badge_registry(&self, badge_registry: ManagedAddress) {
        self.lock_reentrancy();
        self.require_owner();
        require!(!badge_registry.is_zero(), ERR_ZERO_ADDRESS);

        self.badge_registry_address().set(&badge_registry);

        self.badge_registry_updated_event(&badge_registry);
        self.unlock_reentrancy();
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.lock_reentrancy();
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_ZERO_ADDRESS);

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);

        self.ownership_transferred_event(&previous_owner, &new_owner);
        self.unlock_reentrancy();
    }

    // ========================================================
    // Mission dates
    // ========================================================

    #[endpoint(setMissionEndDate)]
    fn set_mission_end_date(&self, mission_id: u64, new_end_date: u64) {
        self.lock_reentrancy();
        self.require_owner();
        let mut mission = self.require_mission(mission_id);
        self.apply_end_date(&mut mission, new_end_date);
        self.unlock_reentrancy();
    }

    #[endpoint(updateMissionEndDate)]
    fn update_mission_end_date(&self, mission_id: u64, new_end_date: u64) {
        self.lock_reentrancy();
        let mut mission = self.require_mission(mission_id);
        self.require_mission_creator(&mission);
        self.apply_end_date(&mut mission, new_end_date);
        self.unlock_reentrancy();
    }

    // ========================================================
    // Mission status
    // Active, Paused and Ended are reachable from one another in
    // any direction, Ended included.
    // ========================================================

    #[endpoint(changeMissionStatus)]
    fn change_mission_status(&self, mission_id: u64, status: MissionStatus) {
        self.lock_reentrancy();
        let mut mission = self.require_mission(mission_id);
        self.require_mission_creator(&mission);
        self.apply_status(&mut mission, status);
        self.unlock_reentrancy();
    }

    #[endpoint(emergencyChangeMissionStatus)]
    fn emergency_change_mission_status(&self, mission_id: u64, status: MissionStatus) {
        self.lock_reentrancy();
        self.require_owner();
        let mut mission = self.require_mission(mission_id);
        self.apply_status(&mut mission, status);
        self.unlock_reentrancy();
    }

    // ========================================================
    // Verifier roster
    // ========================================================

    #[endpoint(addVerifier)]
    fn add_verifier(&self, mission_id: u64, verifier: ManagedAddress) {
        self.lock_reentrancy();
        let mission = self.require_mission(mission_id);
        self.require_mission_creator(&mission);
        self.insert_verifier(mission_id, &verifier);
        self.unlock_reentrancy();
    }

    #[endpoint(removeVerifier)]
    fn remove_verifier(&self, mission_id: u64, verifier: ManagedAddress) {
        self.lock_reentrancy();
        let mission = self.require_mission(mission_id);
        self.require_mission_creator(&mission);
        self.drop_verifier(mission_id, &verifier);
        self.unlock_reentrancy();
    }

    #[endpoint(emergencyAddVerifier)]
    fn emergency_add_verifier(&self, mission_id: u64, verifier: ManagedAddress) {
        self.lock_reentrancy();
        self.require_owner();
        self.require_mission(mission_id);
        self.insert_verifier(mission_id, &verifier);
        self.unlock_reentrancy();
    }

    #[endpoint(emergencyRemoveVerifier)]
    fn emergency_remove_verifier(&self, mission_id: u64, verifier: ManagedAddress) {
        self.lock_reentrancy();
        self.require_owner();
        self.require_mission(mission_id);
        self.drop_verifier(mission_id, &verifier);
        self.unlock_reentrancy();
    }

    // ========================================================
    // Merchant roster, kept in the mission's reward ledger
    // ========================================================

    #[endpoint(addMerchant)]
    fn add_merchant(&self, mission_id: u64, merchant: ManagedAddress) {
        self.lock_reentrancy();
        let mission = self.require_mission(mission_id);
        self.require_mission_creator(&mission);
        require!(!merchant.is_zero(), ERR_ZERO_ADDRESS);

        self.tx()
            .to(&mission.reward_ledger)
            .typed(RewardLedgerProxy)
            .add_merchant(mission.reward_ledger_id, &merchant)
            .sync_call();

        self.merchant_added_event(mission_id, &merchant);
        self.unlock_reentrancy();
    }

    #[endpoint(removeMerchant)]
    fn remove_merchant(&self, mission_id: u64, merchant: ManagedAddress) {
        self.lock_reentrancy();
        let mission = self.require_mission(mission_id);
        self.require_mission_creator(&mission);

        self.tx()
            .to(&mission.reward_ledger)
            .typed(RewardLedgerProxy)
            .remove_merchant(mission.reward_ledger_id, &merchant)
            .sync_call();

        self.merchant_removed_event(mission_id, &merchant);
        self.unlock_reentrancy();
    }

    // ========================================================
    // Guards
    // ========================================================

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_NOT_OWNER
        );
    }

    fn require_mission(&self, mission_id: u64) -> Mission<Self::Api> {
        require!(!self.missions(mission_id).is_empty(), ERR_INVALID_MISSION);
        self.missions(mission_id).get()
    }

    fn require_active_mission(&self, mission_id: u64) -> Mission<Self::Api> {
        let mission = self.require_mission(mission_id);
        require!(
            mission.status == MissionStatus::Active,
            ERR_MISSION_NOT_ACTIVE
        );
        mission
    }

    fn require_mission_creator(&self, mission: &Mission<Self::Api>) {
        require!(
            self.blockchain().get_caller() == mission.creator,
            ERR_NOT_MISSION_CREATOR
        );
    }

    fn require_mission_verifier(&self, mission_id: u64, verifier: &ManagedAddress) {
        require!(
            self.mission_verifiers(mission_id).contains(verifier),
            ERR_UNAUTHORIZED_VERIFIER
        );
    }

    // A failed call reverts the flag together with everything else.
    fn lock_reentrancy(&self) {
        require!(!self.reentrancy_lock().get(), ERR_REENTRANT_CALL);
        self.reentrancy_lock().set(true);
    }

    fn unlock_reentrancy(&self) {
        self.reentrancy_lock().clear();
    }

    fn current_default_verifier(&self) -> ManagedAddress {
        if self.default_verifier().is_empty() {
            ManagedAddress::zero()
        } else {
            self.default_verifier().get()
        }
    }

    // ========================================================
    // Shared effects
    // ========================================================

    fn apply_end_date(&self, mission: &mut Mission<Self::Api>, new_end_date: u64) {
        require!(new_end_date > mission.start_date, ERR_INVALID_DATE_RANGE);

        let old_end_date = mission.end_date;
        mission.end_date = new_end_date;
        self.missions(mission.id).set(&*mission);

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.end_date_updated_event(mission.id, old_end_date, new_end_date, &caller, now);
    }

    fn apply_status(&self, mission: &mut Mission<Self::Api>, status: MissionStatus) {
        let old_status = mission.status;
        mission.status = status;
        self.missions(mission.id).set(&*mission);

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.mission_status_changed_event(mission.id, old_status, status, &caller, now);
    }

    fn insert_verifier(&self, mission_id: u64, verifier: &ManagedAddress) {
        require!(!verifier.is_zero(), ERR_ZERO_ADDRESS);
        require!(
            self.mission_verifiers(mission_id).insert(verifier.clone()),
            ERR_VERIFIER_ALREADY_ADDED
        );

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.verifier_added_event(mission_id, verifier, &caller, now);
    }

    fn drop_verifier(&self, mission_id: u64, verifier: &ManagedAddress) {
        require!(
            self.mission_verifiers(mission_id).swap_remove(verifier),
            ERR_VERIFIER_NOT_FOUND
        );

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.verifier_removed_event(mission_id, verifier, &caller, now);
    }
}
