multiversx_sc::imports!();

use crate::types::{DataHash, Mission, MissionProposal};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("rewardLedgerAddress")]
    fn reward_ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("badgeRegistryAddress")]
    fn badge_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("maxAttestationAge")]
    fn max_attestation_age(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("defaultVerifier")]
    fn default_verifier(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;

    // ── Mission registry ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<MissionProposal<Self::Api>>;

    #[storage_mapper("missionCount")]
    fn mission_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("missions")]
    fn missions(&self, id: u64) -> SingleValueMapper<Mission<Self::Api>>;

    #[storage_mapper("missionVerifiers")]
    fn mission_verifiers(&self, mission_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    // ── Participation ledger ──

    #[storage_mapper("userRewards")]
    fn user_rewards(&self, mission_id: u64, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("completionCount")]
    fn completion_count(&self, mission_id: u64, user: &ManagedAddress) -> SingleValueMapper<u64>;

    // ── Replay guard ──

    #[storage_mapper("processedAttestation")]
    fn processed_attestation(&self, digest: &DataHash<Self::Api>) -> SingleValueMapper<bool>;
}
