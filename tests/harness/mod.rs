// Shared setup for the mission protocol blackbox tests.
//
// Deploys the reward ledger, the protocol and the badge registry into one
// Rust-VM world and signs attestations with ed25519 keys whose public keys
// double as verifier addresses.

#![allow(dead_code)]

use ed25519_dalek::{Signer, SigningKey};
use multiversx_sc_scenario::imports::*;

use mission_protocol::badge_registry_proxy::BadgeRegistryProxy;
use mission_protocol::mission_protocol_proxy::MissionProtocolProxy;
use mission_protocol::reward_ledger_proxy::RewardLedgerProxy;
use mission_protocol::types::{Mission, UserParticipation};

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const CREATOR: TestAddress = TestAddress::new("creator");
pub const RELAYER: TestAddress = TestAddress::new("relayer");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");
pub const MERCHANT: TestAddress = TestAddress::new("merchant");
pub const USER_A: TestAddress = TestAddress::new("user-a");
pub const USER_B: TestAddress = TestAddress::new("user-b");
pub const USER_C: TestAddress = TestAddress::new("user-c");

pub const PROTOCOL: TestSCAddress = TestSCAddress::new("mission-protocol");
pub const LEDGER: TestSCAddress = TestSCAddress::new("reward-ledger");
pub const BADGES: TestSCAddress = TestSCAddress::new("badge-registry");

const PROTOCOL_CODE: MxscPath = MxscPath::new("output/mission-protocol.mxsc.json");
const LEDGER_CODE: MxscPath = MxscPath::new("reward-ledger/output/reward-ledger.mxsc.json");
const BADGES_CODE: MxscPath = MxscPath::new("badge-registry/output/badge-registry.mxsc.json");
const REENTRANT_LEDGER_CODE: MxscPath =
    MxscPath::new("reentrant-ledger/output/reentrant-ledger.mxsc.json");

pub const UNDERLYING: TestTokenIdentifier = TestTokenIdentifier::new("GREEN-123456");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-654321");
pub const CREATOR_FUNDS: u64 = 1_000_000;

/// 2025-03-15T12:00:00Z
pub const NOW: u64 = 1_742_040_000;
pub const TODAY: u32 = 20250315;
pub const DAY: u64 = 86_400;
pub const MISSION_START: u64 = NOW - DAY;
pub const MISSION_END: u64 = NOW + 30 * DAY;

const ATTESTATION_DOMAIN: &[u8] = b"ESG_MISSION_ATTESTATION";
const BATCH_ATTESTATION_DOMAIN: &[u8] = b"ESG_MISSION_BATCH_ATTESTATION";

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(PROTOCOL_CODE, mission_protocol::ContractBuilder);
    blockchain.register_contract(LEDGER_CODE, reward_ledger::ContractBuilder);
    blockchain.register_contract(BADGES_CODE, badge_registry::ContractBuilder);
    blockchain.register_contract(REENTRANT_LEDGER_CODE, reentrant_ledger::ContractBuilder);
    blockchain
}

pub fn data_hash(seed: u8) -> ManagedByteArray<StaticApi, 32> {
    ManagedByteArray::new_from_bytes(&[seed; 32])
}

pub fn managed_address(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn amount_bytes(amount: u64) -> [u8; 32] {
    let mut encoded = [0u8; 32];
    encoded[24..].copy_from_slice(&amount.to_be_bytes());
    encoded
}

/// One batch entry: user, data-hash seed, reward.
pub type BatchEntry = (TestAddress<'static>, u8, u64);

pub struct MissionHarness {
    pub world: ScenarioWorld,
    pub verifier_key: SigningKey,
}

impl MissionHarness {
    pub fn new() -> Self {
        Self::deploy(LEDGER_CODE)
    }

    /// Same world, but the reward ledger at `LEDGER` calls back into the
    /// protocol from every `transfer`.
    pub fn with_reentrant_ledger() -> Self {
        Self::deploy(REENTRANT_LEDGER_CODE)
    }

    fn deploy(ledger_code: MxscPath) -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        world
            .account(CREATOR)
            .nonce(1)
            .esdt_balance(UNDERLYING, CREATOR_FUNDS)
            .esdt_balance(OTHER_TOKEN, CREATOR_FUNDS);
        world.account(RELAYER).nonce(1);
        world.account(OUTSIDER).nonce(1);
        world.account(MERCHANT).nonce(1);
        world.account(USER_A).nonce(1);
        world.account(USER_B).nonce(1);
        world.account(USER_C).nonce(1);
        world.current_block().block_timestamp(NOW);

        world
            .tx()
            .from(OWNER)
            .typed(RewardLedgerProxy)
            .init()
            .code(ledger_code)
            .new_address(LEDGER)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(MissionProtocolProxy)
            .init(LEDGER, OptionalValue::<u64>::None)
            .code(PROTOCOL_CODE)
            .new_address(PROTOCOL)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(BadgeRegistryProxy)
            .init(PROTOCOL)
            .code(BADGES_CODE)
            .new_address(BADGES)
            .run();

        world
            .tx()
            .from(OWNER)
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .set_badge_registry(BADGES)
            .run();

        MissionHarness {
            world,
            verifier_key: SigningKey::from_bytes(&[7u8; 32]),
        }
    }

    pub fn verifier(&self) -> ManagedAddress<StaticApi> {
        verifier_address(&self.verifier_key)
    }

    // ========================================================
    // Proposals / missions
    // ========================================================

    pub fn create_proposal(&mut self, total_budget: u64, transferable: bool) -> u64 {
        let mut verifiers = ManagedVec::<StaticApi, ManagedAddress<StaticApi>>::new();
        verifiers.push(self.verifier());
        let mut merchants = ManagedVec::<StaticApi, ManagedAddress<StaticApi>>::new();
        merchants.push(managed_address(MERCHANT));

        self.world
            .tx()
            .from(CREATOR)
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .create_proposal(
                ManagedBuffer::from("Plant 10k trees"),
                ManagedBuffer::from("Verified tree planting in the valley"),
                BigUint::<StaticApi>::from(total_budget),
                MISSION_START,
                MISSION_END,
                verifiers,
                merchants,
                transferable,
            )
            .payment(EsdtTokenPayment::new(
                UNDERLYING.to_token_identifier(),
                0,
                BigUint::from(total_budget),
            ))
            .returns(ReturnsResult)
            .run()
    }

    pub fn approve_proposal(&mut self, proposal_id: u64) -> u64 {
        self.world
            .tx()
            .from(OWNER)
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .approve_proposal(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_mission(&mut self, total_budget: u64) -> u64 {
        let proposal_id = self.create_proposal(total_budget, false);
        self.approve_proposal(proposal_id)
    }

    pub fn mission(&mut self, mission_id: u64) -> Mission<StaticApi> {
        self.world
            .query()
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .get_mission(mission_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn participation(
        &mut self,
        mission_id: u64,
        user: TestAddress,
    ) -> UserParticipation<StaticApi> {
        self.world
            .query()
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .get_user_participation(mission_id, user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn ledger_balance(&mut self, ledger_id: u64, holder: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(LEDGER)
            .typed(RewardLedgerProxy)
            .balance_of(ledger_id, holder)
            .returns(ReturnsResult)
            .run()
    }

    pub fn protocol_escrow(&mut self, ledger_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(LEDGER)
            .typed(RewardLedgerProxy)
            .balance_of(ledger_id, PROTOCOL)
            .returns(ReturnsResult)
            .run()
    }

    // ========================================================
    // Attestations
    // ========================================================

    pub fn sign_attestation(
        &self,
        key: &SigningKey,
        user: TestAddress,
        mission_id: u64,
        date: u32,
        hash_seed: u8,
        reward: u64,
    ) -> ManagedBuffer<StaticApi> {
        let mut message = ATTESTATION_DOMAIN.to_vec();
        message.extend_from_slice(PROTOCOL.to_address().as_bytes());
        message.extend_from_slice(user.to_address().as_bytes());
        message.extend_from_slice(&mission_id.to_be_bytes());
        message.extend_from_slice(&date.to_be_bytes());
        message.extend_from_slice(&[hash_seed; 32]);
        message.extend_from_slice(&amount_bytes(reward));
        ManagedBuffer::from(&key.sign(&message).to_bytes()[..])
    }

    pub fn sign_batch(
        &self,
        key: &SigningKey,
        mission_id: u64,
        date: u32,
        entries: &[BatchEntry],
    ) -> ManagedBuffer<StaticApi> {
        let mut message = BATCH_ATTESTATION_DOMAIN.to_vec();
        message.extend_from_slice(PROTOCOL.to_address().as_bytes());
        message.extend_from_slice(&mission_id.to_be_bytes());
        message.extend_from_slice(&date.to_be_bytes());
        message.extend_from_slice(&(entries.len() as u32).to_be_bytes());
        for (user, hash_seed, reward) in entries {
            message.extend_from_slice(user.to_address().as_bytes());
            message.extend_from_slice(&[*hash_seed; 32]);
            message.extend_from_slice(&amount_bytes(*reward));
        }
        ManagedBuffer::from(&key.sign(&message).to_bytes()[..])
    }

    pub fn submit_attestation(
        &mut self,
        user: TestAddress,
        mission_id: u64,
        date: u32,
        hash_seed: u8,
        reward: u64,
    ) {
        let signature =
            self.sign_attestation(&self.verifier_key, user, mission_id, date, hash_seed, reward);
        let verifier = self.verifier();
        self.world
            .tx()
            .from(RELAYER)
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .submit_attestation(
                user,
                mission_id,
                date,
                data_hash(hash_seed),
                BigUint::<StaticApi>::from(reward),
                verifier,
                signature,
            )
            .run();
    }

    pub fn submit_attestation_expect_error(
        &mut self,
        user: TestAddress,
        mission_id: u64,
        date: u32,
        hash_seed: u8,
        reward: u64,
        message: &str,
    ) {
        let signature =
            self.sign_attestation(&self.verifier_key, user, mission_id, date, hash_seed, reward);
        let verifier = self.verifier();
        self.world
            .tx()
            .from(RELAYER)
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .submit_attestation(
                user,
                mission_id,
                date,
                data_hash(hash_seed),
                BigUint::<StaticApi>::from(reward),
                verifier,
                signature,
            )
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn batch_args(
        entries: &[BatchEntry],
    ) -> (
        ManagedVec<StaticApi, ManagedAddress<StaticApi>>,
        ManagedVec<StaticApi, ManagedByteArray<StaticApi, 32>>,
        ManagedVec<StaticApi, BigUint<StaticApi>>,
    ) {
        let mut users = ManagedVec::new();
        let mut hashes = ManagedVec::new();
        let mut rewards = ManagedVec::new();
        for (user, hash_seed, reward) in entries {
            users.push(managed_address(*user));
            hashes.push(data_hash(*hash_seed));
            rewards.push(BigUint::from(*reward));
        }
        (users, hashes, rewards)
    }

    pub fn submit_batch(&mut self, mission_id: u64, date: u32, entries: &[BatchEntry]) {
        let signature = self.sign_batch(&self.verifier_key, mission_id, date, entries);
        let verifier = self.verifier();
        let (users, hashes, rewards) = Self::batch_args(entries);
        self.world
            .tx()
            .from(RELAYER)
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .submit_batch_attestation(users, mission_id, date, hashes, rewards, verifier, signature)
            .run();
    }

    pub fn submit_batch_expect_error(
        &mut self,
        mission_id: u64,
        date: u32,
        entries: &[BatchEntry],
        message: &str,
    ) {
        let signature = self.sign_batch(&self.verifier_key, mission_id, date, entries);
        let verifier = self.verifier();
        let (users, hashes, rewards) = Self::batch_args(entries);
        self.world
            .tx()
            .from(RELAYER)
            .to(PROTOCOL)
            .typed(MissionProtocolProxy)
            .submit_batch_attestation(users, mission_id, date, hashes, rewards, verifier, signature)
            .returns(ExpectError(4, message))
            .run();
    }
}

pub fn verifier_address(key: &SigningKey) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(Address::from(key.verifying_key().to_bytes()))
}
