multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// 32-byte digest: attestation content hashes and replay-guard keys.
pub type DataHash<M> = ManagedByteArray<M, 32>;

// ============================================================
// Mission Status: switchable in any direction by privileged roles
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum MissionStatus {
    /// Attestations are accepted.
    Active,
    /// Temporarily halted by the creator or the owner.
    Paused,
    /// Campaign closed. Can still be re-activated.
    Ended,
}

// ============================================================
// Mission Proposal: draft awaiting owner approval
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct MissionProposal<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    /// Token escrowed as budget backing; the reward ledger redeems into it.
    pub underlying_asset: TokenIdentifier<M>,
    pub total_budget: BigUint<M>,
    pub start_date: u64,
    pub end_date: u64,
    pub verifiers: ManagedVec<M, ManagedAddress<M>>,
    pub merchants: ManagedVec<M, ManagedAddress<M>>,
    pub transferable: bool,
    pub approved: bool,
    /// Creator withdrew the proposal and took the escrow back.
    pub cancelled: bool,
}

// ============================================================
// Mission: the funded campaign
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Mission<M: ManagedTypeApi> {
    pub id: u64,
    pub proposal_id: u64,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub reward_ledger: ManagedAddress<M>,
    pub reward_ledger_id: u64,
    pub underlying_asset: TokenIdentifier<M>,
    pub total_budget: BigUint<M>,
    pub spent_budget: BigUint<M>,
    pub start_date: u64,
    pub end_date: u64,
    pub status: MissionStatus,
    pub created_at: u64,
}

impl<M: ManagedTypeApi> Mission<M> {
    pub fn remaining_budget(&self) -> BigUint<M> {
        if self.total_budget > self.spent_budget {
            &self.total_budget - &self.spent_budget
        } else {
            BigUint::zero()
        }
    }
}

// ============================================================
// Participation: per (mission, user) counters
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct UserParticipation<M: ManagedTypeApi> {
    pub total_rewards_earned: BigUint<M>,
    pub completion_count: u64,
}

// ============================================================
// Protocol config snapshot
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProtocolConfig<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub reward_ledger: ManagedAddress<M>,
    pub badge_registry: ManagedAddress<M>,
    pub default_verifier: ManagedAddress<M>,
    pub max_attestation_age: u64,
    pub max_batch_size: u64,
}
