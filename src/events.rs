multiversx_sc::imports!();

use crate::types::{DataHash, MissionStatus};

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Proposals / missions ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] underlying_asset: &TokenIdentifier,
        #[indexed] total_budget: &BigUint,
        timestamp: u64,
    );

    #[event("proposalCancelled")]
    fn proposal_cancelled_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        refunded: &BigUint,
    );

    #[event("missionCreated")]
    fn mission_created_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] reward_ledger_id: u64,
        #[indexed] total_budget: &BigUint,
        timestamp: u64,
    );

    #[event("missionStatusChanged")]
    fn mission_status_changed_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] old_status: MissionStatus,
        #[indexed] new_status: MissionStatus,
        #[indexed] changed_by: &ManagedAddress,
        timestamp: u64,
    );

    #[event("endDateUpdated")]
    fn end_date_updated_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] old_end_date: u64,
        #[indexed] new_end_date: u64,
        #[indexed] changed_by: &ManagedAddress,
        timestamp: u64,
    );

    // ── Attestations / rewards ──

    #[event("attestationSubmitted")]
    fn attestation_submitted_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] user: &ManagedAddress,
        #[indexed] date: u32,
        #[indexed] data_hash: &DataHash<Self::Api>,
        #[indexed] verifier: &ManagedAddress,
        #[indexed] reward: &BigUint,
        timestamp: u64,
    );

    #[event("batchAttestationSubmitted")]
    fn batch_attestation_submitted_event(
        &self,
        #[indexed] batch_digest: &DataHash<Self::Api>,
        #[indexed] mission_id: u64,
        #[indexed] date: u32,
        #[indexed] verifier: &ManagedAddress,
        participant_count: usize,
    );

    #[event("rewardPaid")]
    fn reward_paid_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_earned: &BigUint,
    );

    // ── Budget ──

    #[event("budgetAdded")]
    fn budget_added_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] added_by: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] new_total_budget: &BigUint,
        timestamp: u64,
    );

    #[event("totalBudgetUpdated")]
    fn total_budget_updated_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] old_total_budget: &BigUint,
        #[indexed] new_total_budget: &BigUint,
        timestamp: u64,
    );

    // ── Rosters ──

    #[event("verifierAdded")]
    fn verifier_added_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] verifier: &ManagedAddress,
        #[indexed] added_by: &ManagedAddress,
        timestamp: u64,
    );

    #[event("verifierRemoved")]
    fn verifier_removed_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] verifier: &ManagedAddress,
        #[indexed] removed_by: &ManagedAddress,
        timestamp: u64,
    );

    #[event("merchantAdded")]
    fn merchant_added_event(&self, #[indexed] mission_id: u64, #[indexed] merchant: &ManagedAddress);

    #[event("merchantRemoved")]
    fn merchant_removed_event(&self, #[indexed] mission_id: u64, #[indexed] merchant: &ManagedAddress);

    // ── Global config ──

    #[event("maxAttestationAgeUpdated")]
    fn max_attestation_age_updated_event(&self, #[indexed] old_days: u64, new_days: u64);

    #[event("defaultVerifierUpdated")]
    fn default_verifier_updated_event(
        &self,
        #[indexed] old_verifier: &ManagedAddress,
        new_verifier: &ManagedAddress,
    );

    #[event("badgeRegistryUpdated")]
    fn badge_registry_updated_event(&self, #[indexed] badge_registry: &ManagedAddress);

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        new_owner: &ManagedAddress,
    );

    // ── Badges ──

    #[event("badgeMinted")]
    fn badge_minted_event(
        &self,
        #[indexed] badge_id: u64,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] mission_id: u64,
        metadata_ref: &ManagedBuffer,
    );
}
