multiversx_sc::imports!();

use crate::errors::*;
use crate::reward_ledger_proxy::RewardLedgerProxy;
use crate::types::Mission;

/// Keeps `spent_budget <= total_budget` for every mission and moves
/// reward units out of escrow. Spent budget only ever grows.
#[multiversx_sc::module]
pub trait BudgetModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessControlModule
{
    // ========================================================
    // ENDPOINT: addMissionBudget
    // Creator tops up with the underlying asset; the ledger mints
    // matching units back to escrow.
    // ========================================================

    #[endpoint(addMissionBudget)]
    #[payable("*")]
    fn add_mission_budget(&self, mission_id: u64) {
        self.lock_reentrancy();
        let mut mission = self.require_mission(mission_id);
        self.require_mission_creator(&mission);

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == mission.underlying_asset && payment.token_nonce == 0,
            ERR_INVALID_PAYMENT
        );
        require!(payment.amount > 0u64, ERR_INVALID_BUDGET);
        let amount = payment.amount.clone();

        self.deposit_into_ledger(&mission, &amount);

        mission.total_budget += &amount;
        self.missions(mission_id).set(&mission);

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.budget_added_event(mission_id, &caller, &amount, &mission.total_budget, now);
        self.unlock_reentrancy();
    }

    // ========================================================
    // ENDPOINT: setMissionTotalBudget
    // Owner override of the ceiling. Never below what is spent.
    // ========================================================

    #[endpoint(setMissionTotalBudget)]
    fn set_mission_total_budget(&self, mission_id: u64, new_total_budget: BigUint) {
        self.lock_reentrancy();
        self.require_owner();
        let mut mission = self.require_mission(mission_id);
        require!(
            new_total_budget >= mission.spent_budget,
            ERR_BUDGET_BELOW_SPENT
        );

        let old_total_budget = core::mem::replace(&mut mission.total_budget, new_total_budget);
        self.missions(mission_id).set(&mission);

        self.total_budget_updated_event(
            mission_id,
            &old_total_budget,
            &mission.total_budget,
            self.blockchain().get_block_timestamp(),
        );
        self.unlock_reentrancy();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_budget_available(&self, mission: &Mission<Self::Api>, amount: &BigUint) {
        require!(
            &mission.spent_budget + amount <= mission.total_budget,
            ERR_INSUFFICIENT_BUDGET
        );
    }

    /// Books an accepted reward against the mission and the participant.
    /// The caller persists `mission`. Returns the participant's new total.
    fn credit_participant(
        &self,
        mission: &mut Mission<Self::Api>,
        user: &ManagedAddress,
        reward: &BigUint,
    ) -> BigUint {
        mission.spent_budget += reward;
        self.completion_count(mission.id, user).update(|count| *count += 1);
        self.user_rewards(mission.id, user).update(|earned| {
            *earned += reward;
            earned.clone()
        })
    }

    fn pay_reward(&self, mission: &Mission<Self::Api>, user: &ManagedAddress, reward: &BigUint) {
        let paid: bool = self
            .tx()
            .to(&mission.reward_ledger)
            .typed(RewardLedgerProxy)
            .transfer(mission.reward_ledger_id, user, reward)
            .returns(ReturnsResult)
            .sync_call();
        require!(paid, ERR_REWARD_TRANSFER_FAILED);
    }

    fn deposit_into_ledger(&self, mission: &Mission<Self::Api>, amount: &BigUint) {
        self.tx()
            .to(&mission.reward_ledger)
            .typed(RewardLedgerProxy)
            .mint(mission.reward_ledger_id)
            .single_esdt(&mission.underlying_asset, 0, amount)
            .sync_call();
    }
}
