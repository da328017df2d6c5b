#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod attestation;
pub mod badge_registry_proxy;
pub mod budget;
pub mod date;
pub mod errors;
pub mod events;
pub mod mission_protocol_proxy;
pub mod reward_ledger_proxy;
pub mod storage;
pub mod types;

use attestation::MAX_BATCH_SIZE;
use badge_registry_proxy::BadgeRegistryProxy;
use errors::*;
use reward_ledger_proxy::RewardLedgerProxy;
use types::{
    DataHash, Mission, MissionProposal, MissionStatus, ProtocolConfig, UserParticipation,
};

// ============================================================
// Constants
// ============================================================

/// Default freshness window for attestation dates, in days
const DEFAULT_MAX_ATTESTATION_AGE: u64 = 7;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MissionProtocol:
    storage::StorageModule
    + events::EventsModule
    + access::AccessControlModule
    + budget::BudgetModule
    + attestation::AttestationModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, reward_ledger_address: ManagedAddress, max_attestation_age: OptionalValue<u64>) {
        require!(!reward_ledger_address.is_zero(), ERR_ZERO_ADDRESS);
        let max_age = max_attestation_age
            .into_option()
            .unwrap_or(DEFAULT_MAX_ATTESTATION_AGE);
        require!(max_age > 0, ERR_INVALID_ATTESTATION_AGE);

        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.reward_ledger_address().set(&reward_ledger_address);
        self.max_attestation_age().set(max_age);
        self.proposal_count().set(0u64);
        self.mission_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Anyone can propose. The budget is escrowed with the call and
    // the paid token becomes the mission's underlying asset.
    // ========================================================

    #[endpoint(createProposal)]
    #[payable("*")]
    fn create_proposal(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        total_budget: BigUint,
        start_date: u64,
        end_date: u64,
        verifiers: ManagedVec<ManagedAddress>,
        merchants: ManagedVec<ManagedAddress>,
        transferable: bool,
    ) -> u64 {
        self.lock_reentrancy();
        require!(total_budget > 0u64, ERR_INVALID_BUDGET);
        require!(start_date < end_date, ERR_INVALID_DATE_RANGE);
        require!(!verifiers.is_empty(), ERR_NO_VERIFIERS);
        for verifier in verifiers.iter() {
            require!(!verifier.is_zero(), ERR_ZERO_ADDRESS);
        }
        for merchant in merchants.iter() {
            require!(!merchant.is_zero(), ERR_ZERO_ADDRESS);
        }

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_nonce == 0 && payment.amount == total_budget,
            ERR_INVALID_PAYMENT
        );

        let caller = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1;
        let proposal = MissionProposal {
            id: proposal_id,
            name,
            description,
            creator: caller.clone(),
            underlying_asset: payment.token_identifier.clone(),
            total_budget,
            start_date,
            end_date,
            verifiers,
            merchants,
            transferable,
            approved: false,
            cancelled: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.underlying_asset,
            &proposal.total_budget,
            self.blockchain().get_block_timestamp(),
        );
        self.unlock_reentrancy();

        proposal_id
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Creator withdraws an unapproved proposal and its escrow.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u64) {
        self.lock_reentrancy();
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_PROPOSAL
        );

        let mut proposal = self.proposals(proposal_id).get();
        let caller = self.blockchain().get_caller();
        require!(proposal.creator == caller, ERR_NOT_PROPOSAL_CREATOR);
        require!(!proposal.approved, ERR_ALREADY_APPROVED);
        require!(!proposal.cancelled, ERR_PROPOSAL_CANCELLED);

        proposal.cancelled = true;
        self.proposals(proposal_id).set(&proposal);

        self.send().direct_esdt(
            &caller,
            &proposal.underlying_asset,
            0,
            &proposal.total_budget,
        );

        self.proposal_cancelled_event(proposal_id, &caller, &proposal.total_budget);
        self.unlock_reentrancy();
    }

    // ========================================================
    // ENDPOINT: approveProposal
    // Owner turns a proposal into an Active mission: new reward
    // ledger, escrow deposited and minted back 1:1.
    // ========================================================

    #[endpoint(approveProposal)]
    fn approve_proposal(&self, proposal_id: u64) -> u64 {
        self.lock_reentrancy();
        self.require_owner();
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_PROPOSAL
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.approved, ERR_ALREADY_APPROVED);
        require!(!proposal.cancelled, ERR_PROPOSAL_CANCELLED);
        require!(proposal.total_budget > 0u64, ERR_INVALID_PROPOSAL);

        let reward_ledger = self.reward_ledger_address().get();
        let reward_ledger_id: u64 = self
            .tx()
            .to(&reward_ledger)
            .typed(RewardLedgerProxy)
            .create_ledger(
                &proposal.underlying_asset,
                proposal.transferable,
                proposal.merchants.clone(),
            )
            .returns(ReturnsResult)
            .sync_call();

        let mission_id = self.mission_count().get() + 1;
        let now = self.blockchain().get_block_timestamp();
        let mission = Mission {
            id: mission_id,
            proposal_id,
            name: proposal.name.clone(),
            description: proposal.description.clone(),
            creator: proposal.creator.clone(),
            reward_ledger,
            reward_ledger_id,
            underlying_asset: proposal.underlying_asset.clone(),
            total_budget: proposal.total_budget.clone(),
            spent_budget: BigUint::zero(),
            start_date: proposal.start_date,
            end_date: proposal.end_date,
            status: MissionStatus::Active,
            created_at: now,
        };

        self.deposit_into_ledger(&mission, &mission.total_budget);

        self.missions(mission_id).set(&mission);
        self.mission_count().set(mission_id);
        for verifier in proposal.verifiers.iter() {
            self.mission_verifiers(mission_id).insert(verifier.clone_value());
        }

        proposal.approved = true;
        self.proposals(proposal_id).set(&proposal);

        self.mission_created_event(
            mission_id,
            proposal_id,
            &mission.creator,
            reward_ledger_id,
            &mission.total_budget,
            now,
        );
        self.unlock_reentrancy();

        mission_id
    }

    // ========================================================
    // ENDPOINT: mintBadge
    // Mission id 0 issues an untagged badge.
    // ========================================================

    #[endpoint(mintBadge)]
    fn mint_badge(
        &self,
        recipient: ManagedAddress,
        mission_id: u64,
        metadata_ref: ManagedBuffer,
    ) -> u64 {
        self.lock_reentrancy();
        self.require_owner();
        require!(!recipient.is_zero(), ERR_ZERO_ADDRESS);
        require!(
            !self.badge_registry_address().is_empty(),
            ERR_BADGE_REGISTRY_NOT_SET
        );
        if mission_id != 0 {
            self.require_mission(mission_id);
        }

        let badge_registry = self.badge_registry_address().get();
        let badge_id: u64 = self
            .tx()
            .to(&badge_registry)
            .typed(BadgeRegistryProxy)
            .mint(&recipient, mission_id, &metadata_ref)
            .returns(ReturnsResult)
            .sync_call();

        self.badge_minted_event(badge_id, &recipient, mission_id, &metadata_ref);
        self.unlock_reentrancy();

        badge_id
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMission)]
    fn get_mission(&self, mission_id: u64) -> Mission<Self::Api> {
        self.require_mission(mission_id)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> MissionProposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_PROPOSAL
        );
        self.proposals(proposal_id).get()
    }

    #[view(getRemainingBudget)]
    fn get_remaining_budget(&self, mission_id: u64) -> BigUint {
        self.require_mission(mission_id).remaining_budget()
    }

    #[view(getUserParticipation)]
    fn get_user_participation(
        &self,
        mission_id: u64,
        user: &ManagedAddress,
    ) -> UserParticipation<Self::Api> {
        UserParticipation {
            total_rewards_earned: self.user_rewards(mission_id, user).get(),
            completion_count: self.completion_count(mission_id, user).get(),
        }
    }

    #[view(getCompletionCount)]
    fn get_completion_count(&self, mission_id: u64, user: &ManagedAddress) -> u64 {
        self.completion_count(mission_id, user).get()
    }

    #[view(getMissionVerifiers)]
    fn get_mission_verifiers(&self, mission_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for verifier in self.mission_verifiers(mission_id).iter() {
            result.push(verifier);
        }
        result
    }

    #[view(isMissionVerifier)]
    fn is_mission_verifier(&self, mission_id: u64, verifier: &ManagedAddress) -> bool {
        self.mission_verifiers(mission_id).contains(verifier)
    }

    #[view(getAttestationDigest)]
    fn get_attestation_digest(
        &self,
        user: &ManagedAddress,
        mission_id: u64,
        date: u32,
        data_hash: &DataHash<Self::Api>,
    ) -> DataHash<Self::Api> {
        self.attestation_digest(user, mission_id, date, data_hash)
    }

    #[view(isAttestationProcessed)]
    fn is_attestation_processed(
        &self,
        user: &ManagedAddress,
        mission_id: u64,
        date: u32,
        data_hash: &DataHash<Self::Api>,
    ) -> bool {
        let digest = self.attestation_digest(user, mission_id, date, data_hash);
        self.processed_attestation(&digest).get()
    }

    #[view(getCurrentDate)]
    fn get_current_date(&self) -> u32 {
        self.current_date()
    }

    #[view(getMaxAttestationAge)]
    fn get_max_attestation_age(&self) -> u64 {
        self.max_attestation_age().get()
    }

    #[view(getDefaultVerifier)]
    fn get_default_verifier(&self) -> ManagedAddress {
        self.current_default_verifier()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getMissionCount)]
    fn get_mission_count(&self) -> u64 {
        self.mission_count().get()
    }

    #[view(getProtocolConfig)]
    fn get_protocol_config(&self) -> ProtocolConfig<Self::Api> {
        let badge_registry = if self.badge_registry_address().is_empty() {
            ManagedAddress::zero()
        } else {
            self.badge_registry_address().get()
        };

        ProtocolConfig {
            owner: self.owner().get(),
            reward_ledger: self.reward_ledger_address().get(),
            badge_registry,
            default_verifier: self.current_default_verifier(),
            max_attestation_age: self.max_attestation_age().get(),
            max_batch_size: MAX_BATCH_SIZE as u64,
        }
    }
}
