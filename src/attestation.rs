multiversx_sc::imports!();

use crate::date;
use crate::errors::*;
use crate::types::DataHash;

pub const MAX_BATCH_SIZE: usize = 100;

/// Rewards are signed as 32-byte big-endian integers.
const AMOUNT_WIDTH: usize = 32;

const ATTESTATION_DOMAIN: &[u8] = b"ESG_MISSION_ATTESTATION";
const BATCH_ATTESTATION_DOMAIN: &[u8] = b"ESG_MISSION_BATCH_ATTESTATION";

/// Verifier-signed attestations, single and batched.
///
/// Signatures are ed25519 over a canonical message; the verifier's address
/// is its public key. Each accepted attestation is recorded in the replay
/// guard under the keccak256 digest of `(user, mission, date, data hash)`.
/// The reward is signed but left out of the digest: resubmitting the same
/// attestation with another amount still hits the guard.
#[multiversx_sc::module]
pub trait AttestationModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessControlModule
    + crate::budget::BudgetModule
{
    // ========================================================
    // ENDPOINT: submitAttestation
    // ========================================================

    #[endpoint(submitAttestation)]
    fn submit_attestation(
        &self,
        user: ManagedAddress,
        mission_id: u64,
        date: u32,
        data_hash: DataHash<Self::Api>,
        reward: BigUint,
        verifier: ManagedAddress,
        signature: ManagedBuffer,
    ) {
        self.lock_reentrancy();
        let mut mission = self.require_active_mission(mission_id);
        self.require_mission_verifier(mission_id, &verifier);

        let message = self.attestation_message(&user, mission_id, date, &data_hash, &reward);
        self.crypto()
            .verify_ed25519(verifier.as_managed_buffer(), &message, &signature);

        let digest = self.attestation_digest(&user, mission_id, date, &data_hash);
        require!(
            !self.processed_attestation(&digest).get(),
            ERR_ALREADY_PROCESSED
        );

        self.require_fresh_date(date);
        self.require_budget_available(&mission, &reward);

        // Zero rewards are accepted as no-ops and stay resubmittable.
        if reward == 0u64 {
            self.unlock_reentrancy();
            return;
        }

        self.processed_attestation(&digest).set(true);
        let total_earned = self.credit_participant(&mut mission, &user, &reward);
        self.missions(mission_id).set(&mission);

        self.pay_reward(&mission, &user, &reward);

        let now = self.blockchain().get_block_timestamp();
        self.attestation_submitted_event(
            mission_id,
            &user,
            date,
            &data_hash,
            &verifier,
            &reward,
            now,
        );
        self.reward_paid_event(mission_id, &user, &reward, &total_earned);
        self.unlock_reentrancy();
    }

    // ========================================================
    // ENDPOINT: submitBatchAttestation
    // One signature authorizes the whole batch. Entries with a
    // zero reward or an already processed digest are skipped.
    // ========================================================

    #[endpoint(submitBatchAttestation)]
    fn submit_batch_attestation(
        &self,
        users: ManagedVec<ManagedAddress>,
        mission_id: u64,
        date: u32,
        data_hashes: ManagedVec<DataHash<Self::Api>>,
        rewards: ManagedVec<BigUint>,
        verifier: ManagedAddress,
        signature: ManagedBuffer,
    ) {
        self.lock_reentrancy();
        let count = users.len();
        require!(
            count == data_hashes.len() && count == rewards.len(),
            ERR_ARRAY_LENGTH_MISMATCH
        );
        require!(count > 0 && count <= MAX_BATCH_SIZE, ERR_TOO_MANY_USERS);

        let mut mission = self.require_active_mission(mission_id);
        self.require_mission_verifier(mission_id, &verifier);

        let message =
            self.batch_attestation_message(&users, mission_id, date, &data_hashes, &rewards);
        self.crypto()
            .verify_ed25519(verifier.as_managed_buffer(), &message, &signature);

        self.require_fresh_date(date);

        // Reserved against the declared sum, before any entry is skipped.
        let mut declared_total = BigUint::zero();
        for reward in rewards.iter() {
            declared_total += &*reward;
        }
        self.require_budget_available(&mission, &declared_total);

        // ── Bookkeeping, strictly in array order ──
        let mut accepted: ManagedVec<usize> = ManagedVec::new();
        for index in 0..count {
            let reward = rewards.get(index);
            if *reward == 0u64 {
                continue;
            }

            let user = users.get(index);
            let data_hash = data_hashes.get(index);
            let digest = self.attestation_digest(&user, mission_id, date, &data_hash);
            if self.processed_attestation(&digest).get() {
                continue;
            }

            self.processed_attestation(&digest).set(true);
            self.credit_participant(&mut mission, &user, &reward);
            accepted.push(index);
        }
        self.missions(mission_id).set(&mission);

        // ── Payouts ──
        for index in accepted.iter() {
            let user = users.get(index);
            let reward = rewards.get(index);
            self.pay_reward(&mission, &user, &reward);

            let total_earned = self.user_rewards(mission_id, &user).get();
            self.reward_paid_event(mission_id, &user, &reward, &total_earned);
        }

        let batch_digest = self.crypto().keccak256(&message);
        self.batch_attestation_submitted_event(&batch_digest, mission_id, date, &verifier, count);
        self.unlock_reentrancy();
    }

    // ========================================================
    // INTERNAL: canonical encodings
    // ========================================================

    fn attestation_digest(
        &self,
        user: &ManagedAddress,
        mission_id: u64,
        date: u32,
        data_hash: &DataHash<Self::Api>,
    ) -> DataHash<Self::Api> {
        let mut preimage = ManagedBuffer::new();
        preimage.append(user.as_managed_buffer());
        preimage.append_bytes(&mission_id.to_be_bytes());
        preimage.append_bytes(&date.to_be_bytes());
        preimage.append(data_hash.as_managed_buffer());
        self.crypto().keccak256(&preimage)
    }

    fn attestation_message(
        &self,
        user: &ManagedAddress,
        mission_id: u64,
        date: u32,
        data_hash: &DataHash<Self::Api>,
        reward: &BigUint,
    ) -> ManagedBuffer {
        let mut message = self.domain_header(ATTESTATION_DOMAIN);
        message.append(user.as_managed_buffer());
        message.append_bytes(&mission_id.to_be_bytes());
        message.append_bytes(&date.to_be_bytes());
        message.append(data_hash.as_managed_buffer());
        self.append_amount(&mut message, reward);
        message
    }

    fn batch_attestation_message(
        &self,
        users: &ManagedVec<ManagedAddress>,
        mission_id: u64,
        date: u32,
        data_hashes: &ManagedVec<DataHash<Self::Api>>,
        rewards: &ManagedVec<BigUint>,
    ) -> ManagedBuffer {
        let mut message = self.domain_header(BATCH_ATTESTATION_DOMAIN);
        message.append_bytes(&mission_id.to_be_bytes());
        message.append_bytes(&date.to_be_bytes());
        message.append_bytes(&(users.len() as u32).to_be_bytes());
        for index in 0..users.len() {
            message.append(users.get(index).as_managed_buffer());
            message.append(data_hashes.get(index).as_managed_buffer());
            self.append_amount(&mut message, &rewards.get(index));
        }
        message
    }

    /// Domain tag followed by this contract's address, so signatures are
    /// bound to one deployment.
    fn domain_header(&self, domain: &[u8]) -> ManagedBuffer {
        let mut header = ManagedBuffer::new_from_bytes(domain);
        header.append(self.blockchain().get_sc_address().as_managed_buffer());
        header
    }

    fn append_amount(&self, message: &mut ManagedBuffer, amount: &BigUint) {
        let magnitude = amount.to_bytes_be_buffer();
        require!(magnitude.len() <= AMOUNT_WIDTH, ERR_INVALID_BUDGET);
        message.append_bytes(&[0u8; AMOUNT_WIDTH][..AMOUNT_WIDTH - magnitude.len()]);
        message.append(&magnitude);
    }

    // ========================================================
    // INTERNAL: freshness
    // ========================================================

    fn current_date(&self) -> u32 {
        date::date_from_timestamp(self.blockchain().get_block_timestamp())
    }

    fn require_fresh_date(&self, attested_date: u32) {
        let attested_day = match date::day_number_from_date(attested_date) {
            Some(day) => day,
            None => sc_panic!(ERR_INVALID_DATE),
        };
        let today = date::day_number_from_timestamp(self.blockchain().get_block_timestamp());

        require!(attested_day <= today, ERR_INVALID_DATE);
        require!(
            today - attested_day <= self.max_attestation_age().get(),
            ERR_ATTESTATION_EXPIRED
        );
    }
}
